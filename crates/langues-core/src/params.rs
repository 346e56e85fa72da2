// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Canonical Tongue Parameters
// ─────────────────────────────────────────────────────────────────────
//! Weights, phases and frequencies for the six tongues.
//!
//! All tables are compile-time constants indexed in dimension order
//! (0 = KO/time … 5 = DR/entropy).

use langues_types::{Tongue, N_DIMS};

/// Golden ratio (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Full circle in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Tongue weights w_l = φ^l: 1, φ, φ², φ³, φ⁴, φ⁵.
pub const TONGUE_WEIGHTS: [f64; N_DIMS] = [
    1.0,
    PHI,
    PHI * PHI,
    PHI * PHI * PHI,
    PHI * PHI * PHI * PHI,
    PHI * PHI * PHI * PHI * PHI,
];

/// Tongue phases φ_l = 2πl/6: 0°, 60°, 120°, 180°, 240°, 300°.
pub const TONGUE_PHASES: [f64; N_DIMS] = [
    0.0,
    TAU * 1.0 / 6.0,
    TAU * 2.0 / 6.0,
    TAU * 3.0 / 6.0,
    TAU * 4.0 / 6.0,
    TAU * 5.0 / 6.0,
];

/// Tongue frequencies ω_l, from harmonic interval ratios.
/// Catalogued constants, not derived from the phase table.
pub const TONGUE_FREQUENCIES: [f64; N_DIMS] = [
    1.0,       // KO — unison
    9.0 / 8.0, // AV — major second
    5.0 / 4.0, // RU — major third
    4.0 / 3.0, // CA — perfect fourth
    3.0 / 2.0, // UM — perfect fifth
    5.0 / 3.0, // DR — major sixth
];

/// Base cost L_base = Σ w_l, the cost of a point with zero deviation
/// and no phase contribution (≈ 27.416).
pub const L_BASE: f64 = TONGUE_WEIGHTS[0]
    + TONGUE_WEIGHTS[1]
    + TONGUE_WEIGHTS[2]
    + TONGUE_WEIGHTS[3]
    + TONGUE_WEIGHTS[4]
    + TONGUE_WEIGHTS[5];

/// Scale of the oscillatory term added to each deviation. Bounds the
/// phase contribution to ±0.1 of the exponent argument.
pub const PHASE_AMPLITUDE: f64 = 0.1;

/// Phase shift sin(ω_l·t + φ_l) for dimension `l` at time `t`.
#[inline]
pub fn phase_shift(l: usize, t: f64) -> f64 {
    (TONGUE_FREQUENCIES[l] * t + TONGUE_PHASES[l]).sin()
}

pub fn tongue_weight(tongue: Tongue) -> f64 {
    TONGUE_WEIGHTS[tongue.index()]
}

pub fn tongue_phase(tongue: Tongue) -> f64 {
    TONGUE_PHASES[tongue.index()]
}

pub fn tongue_frequency(tongue: Tongue) -> f64 {
    TONGUE_FREQUENCIES[tongue.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_identity() {
        assert!((PHI * PHI - (PHI + 1.0)).abs() < 1e-12);
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_weights_match_powers() {
        for (l, &w) in TONGUE_WEIGHTS.iter().enumerate() {
            assert!(
                (w - PHI.powi(l as i32)).abs() < 1e-12,
                "w[{l}] = {w} != φ^{l}"
            );
        }
    }

    #[test]
    fn test_l_base() {
        assert!((L_BASE - 27.416_407_864_998_74).abs() < 1e-9, "L_BASE = {L_BASE}");
        let sum: f64 = TONGUE_WEIGHTS.iter().sum();
        assert!((L_BASE - sum).abs() < 1e-12);
    }

    #[test]
    fn test_phases_in_degrees() {
        let degrees: Vec<f64> = TONGUE_PHASES.iter().map(|p| p.to_degrees().round()).collect();
        assert_eq!(degrees, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn test_frequencies_positive_and_ascending() {
        assert!(TONGUE_FREQUENCIES.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(TONGUE_FREQUENCIES[0], 1.0);
        assert_eq!(TONGUE_FREQUENCIES[4], 1.5);
    }

    #[test]
    fn test_tongue_accessors() {
        assert_eq!(tongue_weight(Tongue::Ko), 1.0);
        assert_eq!(tongue_weight(Tongue::Dr), TONGUE_WEIGHTS[5]);
        assert_eq!(tongue_phase(Tongue::Ca), TONGUE_PHASES[3]);
        assert_eq!(tongue_frequency(Tongue::Av), 9.0 / 8.0);
    }

    #[test]
    fn test_phase_shift_at_zero() {
        assert_eq!(phase_shift(0, 0.0), 0.0);
        assert!((phase_shift(1, 0.0) - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((phase_shift(4, 0.0) + 3f64.sqrt() / 2.0).abs() < 1e-12);
    }
}
