// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Tongues and Dimensions
// ─────────────────────────────────────────────────────────────────────
//! The six tongues (KO, AV, RU, CA, UM, DR) and the six hyperspace
//! dimensions they govern. Tongue `l` always maps to dimension `l`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LanguesError;

/// Number of dimensions (and tongues) in the langues hyperspace.
pub const N_DIMS: usize = 6;

/// Canonical tongue symbols, in dimension order.
pub const TONGUES: [&str; N_DIMS] = ["KO", "AV", "RU", "CA", "UM", "DR"];

/// Canonical dimension names, in dimension order.
pub const DIMENSIONS: [&str; N_DIMS] = ["time", "intent", "policy", "trust", "risk", "entropy"];

/// One of the six tongues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tongue {
    Ko,
    Av,
    Ru,
    Ca,
    Um,
    Dr,
}

impl Tongue {
    pub const ALL: [Tongue; N_DIMS] = [
        Tongue::Ko,
        Tongue::Av,
        Tongue::Ru,
        Tongue::Ca,
        Tongue::Um,
        Tongue::Dr,
    ];

    /// Position in the canonical order (0 = KO … 5 = DR).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn symbol(self) -> &'static str {
        TONGUES[self as usize]
    }

    /// The dimension this tongue phase-shifts.
    pub const fn dimension(self) -> Dimension {
        Dimension::ALL[self as usize]
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Tongue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Tongue {
    type Err = LanguesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        TONGUES
            .iter()
            .position(|&sym| sym == upper)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| LanguesError::UnknownTongue(s.to_string()))
    }
}

/// One of the six hyperspace dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Time,
    Intent,
    Policy,
    Trust,
    Risk,
    Entropy,
}

impl Dimension {
    pub const ALL: [Dimension; N_DIMS] = [
        Dimension::Time,
        Dimension::Intent,
        Dimension::Policy,
        Dimension::Trust,
        Dimension::Risk,
        Dimension::Entropy,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        DIMENSIONS[self as usize]
    }

    pub const fn tongue(self) -> Tongue {
        Tongue::ALL[self as usize]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A subset of the six tongues, stored as a bitmask.
///
/// Used to restrict which dimensions contribute to a cost evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TongueSet {
    bits: u8,
}

impl TongueSet {
    const MASK: u8 = (1u8 << N_DIMS) - 1;

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn all() -> Self {
        Self { bits: Self::MASK }
    }

    pub fn insert(&mut self, tongue: Tongue) {
        self.bits |= 1u8 << tongue.index();
    }

    pub fn remove(&mut self, tongue: Tongue) {
        self.bits &= !(1u8 << tongue.index());
    }

    #[inline]
    pub const fn contains(self, tongue: Tongue) -> bool {
        self.bits & (1u8 << tongue.index()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Tongue> {
        Tongue::ALL.into_iter().filter(move |&t| self.contains(t))
    }

    /// Parse a set from tongue symbols, e.g. `["KO", "ca"]`.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, LanguesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols
            .into_iter()
            .map(|s| s.as_ref().parse::<Tongue>())
            .collect()
    }
}

impl FromIterator<Tongue> for TongueSet {
    fn from_iter<I: IntoIterator<Item = Tongue>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tongue in iter {
            set.insert(tongue);
        }
        set
    }
}

impl<const N: usize> From<[Tongue; N]> for TongueSet {
    fn from(tongues: [Tongue; N]) -> Self {
        tongues.into_iter().collect()
    }
}

impl Serialize for TongueSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for TongueSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tongues = Vec::<Tongue>::deserialize(deserializer)?;
        Ok(tongues.into_iter().collect())
    }
}
