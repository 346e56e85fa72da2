// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Hyperspace Point Types
// ─────────────────────────────────────────────────────────────────────
//! Observed points and the ideal (safe) reference state.
//!
//! Both are plain `Copy` value types whose fields follow the canonical
//! dimension order: time, intent, policy, trust, risk, entropy. Index 0
//! is always time and index 5 is always entropy.

use serde::{Deserialize, Serialize};

use crate::error::{LanguesError, LanguesResult};
use crate::tongue::{Dimension, N_DIMS};

/// A point in the 6D langues hyperspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperspacePoint {
    pub time: f64,
    pub intent: f64,
    pub policy: f64,
    pub trust: f64,
    pub risk: f64,
    pub entropy: f64,
}

impl Default for HyperspacePoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            intent: 0.0,
            policy: 0.0,
            trust: 0.8,
            risk: 0.1,
            entropy: 0.1,
        }
    }
}

impl HyperspacePoint {
    pub const fn new(
        time: f64,
        intent: f64,
        policy: f64,
        trust: f64,
        risk: f64,
        entropy: f64,
    ) -> Self {
        Self {
            time,
            intent,
            policy,
            trust,
            risk,
            entropy,
        }
    }

    pub const fn to_vector(&self) -> [f64; N_DIMS] {
        [
            self.time,
            self.intent,
            self.policy,
            self.trust,
            self.risk,
            self.entropy,
        ]
    }

    pub const fn from_vector(v: [f64; N_DIMS]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// Convert external data, rejecting anything that is not exactly
    /// six components long.
    pub fn from_slice(v: &[f64]) -> LanguesResult<Self> {
        Ok(Self::from_vector(checked_vector(v)?))
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        self.to_vector()[dim.index()]
    }

    /// Copy of this point with a single coordinate replaced.
    pub fn with(&self, dim: Dimension, value: f64) -> Self {
        let mut v = self.to_vector();
        v[dim.index()] = value;
        Self::from_vector(v)
    }

    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|x| x.is_finite())
    }
}

impl From<[f64; N_DIMS]> for HyperspacePoint {
    fn from(v: [f64; N_DIMS]) -> Self {
        Self::from_vector(v)
    }
}

impl From<HyperspacePoint> for [f64; N_DIMS] {
    fn from(p: HyperspacePoint) -> Self {
        p.to_vector()
    }
}

impl TryFrom<&[f64]> for HyperspacePoint {
    type Error = LanguesError;

    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(v)
    }
}

impl From<IdealState> for HyperspacePoint {
    fn from(mu: IdealState) -> Self {
        Self::from_vector(mu.to_vector())
    }
}

/// Ideal/safe state μ against which deviations are measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealState {
    /// Relative time anchor.
    pub time: f64,
    /// Neutral intent.
    pub intent: f64,
    /// Balanced policy.
    pub policy: f64,
    /// High trust.
    pub trust: f64,
    /// Low risk.
    pub risk: f64,
    /// Low entropy.
    pub entropy: f64,
}

impl Default for IdealState {
    fn default() -> Self {
        Self {
            time: 0.0,
            intent: 0.0,
            policy: 0.5,
            trust: 0.9,
            risk: 0.1,
            entropy: 0.2,
        }
    }
}

impl IdealState {
    pub const fn to_vector(&self) -> [f64; N_DIMS] {
        [
            self.time,
            self.intent,
            self.policy,
            self.trust,
            self.risk,
            self.entropy,
        ]
    }

    pub const fn from_vector(v: [f64; N_DIMS]) -> Self {
        Self {
            time: v[0],
            intent: v[1],
            policy: v[2],
            trust: v[3],
            risk: v[4],
            entropy: v[5],
        }
    }

    pub fn from_slice(v: &[f64]) -> LanguesResult<Self> {
        Ok(Self::from_vector(checked_vector(v)?))
    }

    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|x| x.is_finite())
    }
}

impl From<HyperspacePoint> for IdealState {
    fn from(p: HyperspacePoint) -> Self {
        Self::from_vector(p.to_vector())
    }
}

impl TryFrom<&[f64]> for IdealState {
    type Error = LanguesError;

    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(v)
    }
}

fn checked_vector(v: &[f64]) -> LanguesResult<[f64; N_DIMS]> {
    <[f64; N_DIMS]>::try_from(v).map_err(|_| {
        LanguesError::Validation(format!(
            "expected {N_DIMS} components (time, intent, policy, trust, risk, entropy), got {}",
            v.len()
        ))
    })
}
