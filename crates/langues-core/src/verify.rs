// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Metric Property Checks
// ─────────────────────────────────────────────────────────────────────
//! Pure predicates over the tongue tables and the metric.
//!
//! Each returns `true` when the property holds. They carry no state
//! and are meant to run as self-tests, not on the decision path.

use serde::{Deserialize, Serialize};

use langues_types::{HyperspacePoint, N_DIMS};

use crate::metric::LanguesMetric;
use crate::params::{phase_shift, PHI, TAU, TONGUE_PHASES, TONGUE_WEIGHTS};

const TOLERANCE: f64 = 1e-10;

/// Offsets from the ideal applied in turn to each dimension.
const MONOTONICITY_DELTAS: [f64; 5] = [0.1, 0.2, 0.3, 0.5, 1.0];

/// Integer time samples for the phase bound check.
const PHASE_SAMPLES: u32 = 1000;

/// ∂L/∂d_l > 0 for every l, checked on the default metric.
pub fn verify_monotonicity() -> bool {
    check_monotonicity(&LanguesMetric::default())
}

/// Monotonicity check against an arbitrary metric.
///
/// Starting from the metric's ideal state, moves one dimension at a
/// time by each offset in turn and requires `compute(t = 0)` to rise
/// strictly at every step.
pub fn check_monotonicity(metric: &LanguesMetric) -> bool {
    let ideal = HyperspacePoint::from(*metric.ideal());

    for dim in 0..N_DIMS {
        let mut l_prev = metric.compute(&ideal, 0.0, None);
        for delta in MONOTONICITY_DELTAS {
            let mut vec = ideal.to_vector();
            vec[dim] += delta;
            let l_curr = metric.compute(&HyperspacePoint::from_vector(vec), 0.0, None);
            if l_curr <= l_prev {
                log::debug!("monotonicity broken in dim {dim} at +{delta}: {l_curr} <= {l_prev}");
                return false;
            }
            l_prev = l_curr;
        }
    }
    true
}

/// sin(ω_l t + φ_l) ∈ [−1, 1] for t = 0..999 and every tongue.
pub fn verify_phase_bounded() -> bool {
    (0..PHASE_SAMPLES).all(|t| {
        (0..N_DIMS).all(|l| phase_shift(l, f64::from(t)).abs() <= 1.0 + TOLERANCE)
    })
}

/// w_{l+1} / w_l = φ for every consecutive pair.
pub fn verify_tongue_weights() -> bool {
    TONGUE_WEIGHTS
        .windows(2)
        .all(|w| (w[1] / w[0] - PHI).abs() <= TOLERANCE)
}

/// φ_{l+1} − φ_l = 60° for every consecutive pair.
pub fn verify_six_fold_symmetry() -> bool {
    let expected_diff = TAU / 6.0;
    TONGUE_PHASES
        .windows(2)
        .all(|p| ((p[1] - p[0]) - expected_diff).abs() <= TOLERANCE)
}

/// Outcome of all property checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub monotonicity: bool,
    pub phase_bounded: bool,
    pub tongue_weights: bool,
    pub six_fold_symmetry: bool,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.monotonicity && self.phase_bounded && self.tongue_weights && self.six_fold_symmetry
    }
}

/// Run every property check.
pub fn verify_all() -> VerificationReport {
    let report = VerificationReport {
        monotonicity: verify_monotonicity(),
        phase_bounded: verify_phase_bounded(),
        tongue_weights: verify_tongue_weights(),
        six_fold_symmetry: verify_six_fold_symmetry(),
    };
    if !report.all_passed() {
        log::error!("langues property check failed: {report:?}");
    }
    report
}
