// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Metric Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{LanguesError, LanguesResult};
use crate::point::IdealState;

/// Amplitude of the cosine tilt applied to `beta_base` per tongue.
///
/// `beta_base` must exceed this for every per-tongue growth rate to stay
/// positive, which is what makes the cost monotone in each deviation.
pub const BETA_TILT: f64 = 0.1;

/// Construction parameters for a `LanguesMetric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Base exponential growth rate.
    /// Default: 1.0.
    pub beta_base: f64,

    /// Ceiling on the cost value, for numerical stability.
    /// Default: 1e6.
    pub clamp_max: f64,

    /// Ideal state μ used for deviations.
    /// Default: time=0, intent=0, policy=0.5, trust=0.9, risk=0.1, entropy=0.2.
    pub ideal: IdealState,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            beta_base: 1.0,
            clamp_max: 1e6,
            ideal: IdealState::default(),
        }
    }
}

impl MetricConfig {
    pub fn with_beta(beta_base: f64) -> Self {
        Self {
            beta_base,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    ///
    /// `beta_base` must exceed [`BETA_TILT`]: the per-tongue rate
    /// β_l = beta_base + 0.1·cos(φ_l) dips to `beta_base - 0.1` on the CA
    /// tongue, and a rate ≤ 0 makes the cost flat or decreasing in that
    /// deviation.
    pub fn validate(&self) -> LanguesResult<()> {
        if !self.beta_base.is_finite() || self.beta_base <= BETA_TILT {
            return Err(LanguesError::Config(format!(
                "beta_base must be finite and > {BETA_TILT} so every per-tongue growth rate \
                 beta_base + {BETA_TILT}·cos(phase) stays positive, got {}",
                self.beta_base
            )));
        }
        if self.clamp_max.is_nan() || self.clamp_max <= 0.0 {
            return Err(LanguesError::Config(format!(
                "clamp_max must be > 0, got {}",
                self.clamp_max
            )));
        }
        if !self.ideal.is_finite() {
            return Err(LanguesError::Config(format!(
                "ideal state must be finite, got {:?}",
                self.ideal.to_vector()
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> LanguesResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LanguesError::Config(format!("JSON parse error: {e}")))
    }

    pub fn to_json(&self) -> LanguesResult<String> {
        serde_json::to_string(self)
            .map_err(|e| LanguesError::Config(format!("JSON encode error: {e}")))
    }
}
