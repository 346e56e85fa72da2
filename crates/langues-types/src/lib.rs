// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Point, tongue, risk, configuration and error types for the
//! Langues Kernel — the six-tongue cost gate.

pub mod config;
pub mod error;
pub mod point;
pub mod risk;
pub mod tongue;

pub use config::MetricConfig;
pub use error::{LanguesError, LanguesResult};
pub use point::{HyperspacePoint, IdealState};
pub use risk::{clamp_cost, Decision, RiskAssessment, RiskLevel};
pub use tongue::{Dimension, Tongue, TongueSet, DIMENSIONS, N_DIMS, TONGUES};
