// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! The langues metric: a six-tongue, phase-shifted exponential cost
//! over the (time, intent, policy, trust, risk, entropy) hyperspace,
//! and the risk gate built on it.
//!
//! # Invariants
//!
//! 1. **Tables are constant**: weights, phases and frequencies are
//!    compile-time constants; no evaluation mutates shared state.
//!
//! 2. **Cost is bounded**: `compute` always returns a value in
//!    `[0, clamp_max]`. Overflow and NaN inputs land on `clamp_max`
//!    and therefore on DENY.
//!
//! 3. **Cost is monotone**: with every β_l > 0, increasing any single
//!    deviation strictly increases the cost. The phase term moves the
//!    exponent by at most ±0.1 and cannot reverse this.

pub mod distance;
pub mod metric;
pub mod params;
pub mod verify;

pub use distance::{build_langues_metric_matrix, langues_distance, langues_inner_product};
pub use metric::{classify, LanguesMetric};
pub use params::{
    L_BASE, PHI, TAU, TONGUE_FREQUENCIES, TONGUE_PHASES, TONGUE_WEIGHTS,
};
pub use verify::{
    check_monotonicity, verify_all, verify_monotonicity, verify_phase_bounded,
    verify_six_fold_symmetry, verify_tongue_weights, VerificationReport,
};

pub use langues_types::{
    Decision, Dimension, HyperspacePoint, IdealState, LanguesError, LanguesResult,
    MetricConfig, RiskAssessment, RiskLevel, Tongue, TongueSet, DIMENSIONS, TONGUES,
};
