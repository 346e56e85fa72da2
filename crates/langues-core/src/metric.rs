// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Metric (Phase-Shifted Exponential Cost)
// ─────────────────────────────────────────────────────────────────────
//! The langues metric L(x, t) over the 6D hyperspace:
//!
//! L(x, t) = Σ_l w_l · exp(β_l · (d_l + 0.1 · sin(ω_l t + φ_l)))
//!
//! - d_l = |x_l − μ_l| — deviation from the ideal state.
//! - w_l = φ^l — tongue weight.
//! - β_l = β_base + 0.1 · cos(φ_l) — per-tongue growth rate.
//! - ω_l, φ_l — tongue frequency and phase.
//!
//! High L means high friction; the value is banded against
//! L_base = Σ w_l to produce a gate decision.

use langues_types::{
    clamp_cost, Decision, HyperspacePoint, IdealState, LanguesResult, MetricConfig,
    RiskAssessment, RiskLevel, TongueSet, N_DIMS,
};

use crate::params::{phase_shift, L_BASE, PHASE_AMPLITUDE, TONGUE_PHASES, TONGUE_WEIGHTS};

/// Six-tongue cost evaluator.
///
/// Immutable after construction: every method takes `&self` and the
/// derived growth rates never change, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguesMetric {
    config: MetricConfig,
    betas: [f64; N_DIMS],
}

impl Default for LanguesMetric {
    fn default() -> Self {
        Self::from_valid(MetricConfig::default())
    }
}

impl LanguesMetric {
    /// Build a metric from a validated configuration.
    pub fn new(config: MetricConfig) -> LanguesResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Default ideal state and clamp with a custom base growth rate.
    pub fn with_beta(beta_base: f64) -> LanguesResult<Self> {
        Self::new(MetricConfig::with_beta(beta_base))
    }

    pub fn with_ideal(ideal: IdealState) -> LanguesResult<Self> {
        Self::new(MetricConfig {
            ideal,
            ..MetricConfig::default()
        })
    }

    fn from_valid(config: MetricConfig) -> Self {
        let betas = TONGUE_PHASES.map(|phi| config.beta_base + 0.1 * phi.cos());
        Self { config, betas }
    }

    pub fn config(&self) -> &MetricConfig {
        &self.config
    }

    pub fn beta_base(&self) -> f64 {
        self.config.beta_base
    }

    pub fn clamp_max(&self) -> f64 {
        self.config.clamp_max
    }

    pub fn ideal(&self) -> &IdealState {
        &self.config.ideal
    }

    /// Per-tongue growth rates β_l.
    pub fn betas(&self) -> &[f64; N_DIMS] {
        &self.betas
    }

    /// Tongue weight table used by this metric.
    pub fn weights(&self) -> &'static [f64; N_DIMS] {
        &TONGUE_WEIGHTS
    }

    /// Deviation d_l = |x_l − μ_l| for each dimension.
    pub fn compute_deviations(&self, x: &HyperspacePoint) -> [f64; N_DIMS] {
        let x_vec = x.to_vector();
        let mu_vec = self.config.ideal.to_vector();
        std::array::from_fn(|l| (x_vec[l] - mu_vec[l]).abs())
    }

    /// Exponential term exp(β_l · (d_l + 0.1 · sin(ω_l t + φ_l))) per dimension.
    fn exp_terms(&self, x: &HyperspacePoint, t: f64) -> [f64; N_DIMS] {
        let deviations = self.compute_deviations(x);
        std::array::from_fn(|l| {
            let shifted_d = deviations[l] + PHASE_AMPLITUDE * phase_shift(l, t);
            (self.betas[l] * shifted_d).exp()
        })
    }

    /// Compute the langues cost L(x, t).
    ///
    /// `active_tongues` restricts which dimensions contribute; `None`
    /// (or an empty set) includes all six. The result is clamped to
    /// `[0, clamp_max]`; a non-finite sum is treated as off the scale.
    pub fn compute(
        &self,
        x: &HyperspacePoint,
        t: f64,
        active_tongues: Option<TongueSet>,
    ) -> f64 {
        if !x.is_finite() || !t.is_finite() {
            log::warn!("langues compute: non-finite input {:?} at t={t}", x.to_vector());
        }
        let active = active_tongues
            .filter(|set| !set.is_empty())
            .unwrap_or_else(TongueSet::all);

        let terms = self.exp_terms(x, t);
        let l: f64 = active
            .iter()
            .map(|tongue| TONGUE_WEIGHTS[tongue.index()] * terms[tongue.index()])
            .sum();

        clamp_cost(l, self.config.clamp_max)
    }

    /// Gradient ∂L/∂x_l over all six dimensions.
    ///
    /// Direction of maximum cost increase. The sign follows the side of
    /// the ideal the coordinate sits on (x_l ≥ μ_l gives +1); the phase
    /// term is held fixed. Neither the clamp nor a tongue filter applies.
    pub fn compute_gradient(&self, x: &HyperspacePoint, t: f64) -> [f64; N_DIMS] {
        let terms = self.exp_terms(x, t);
        let x_vec = x.to_vector();
        let mu_vec = self.config.ideal.to_vector();
        std::array::from_fn(|l| {
            let sign = if x_vec[l] >= mu_vec[l] { 1.0 } else { -1.0 };
            TONGUE_WEIGHTS[l] * self.betas[l] * terms[l] * sign
        })
    }

    /// Convert a cost value to a risk level and decision.
    pub fn risk_level(&self, l: f64) -> (RiskLevel, Decision) {
        let level = classify(l);
        (level, level.decision())
    }

    /// Compute and classify in one step.
    pub fn assess(&self, x: &HyperspacePoint, t: f64) -> RiskAssessment {
        let cost = self.compute(x, t, None);
        let (level, decision) = self.risk_level(cost);
        if level == RiskLevel::Critical {
            log::debug!("langues cost {cost:.4} is CRITICAL (L_base = {L_BASE:.4}), decision {decision}");
        }
        RiskAssessment {
            cost,
            level,
            decision,
        }
    }
}

/// Band a cost value against L_base.
///
/// Bands are half-open: a value exactly on a boundary belongs to the
/// higher band. NaN falls through to CRITICAL.
pub fn classify(l: f64) -> RiskLevel {
    RiskLevel::ALL
        .into_iter()
        .find(|level| matches!(level.upper_multiplier(), Some(m) if l < L_BASE * m))
        .unwrap_or(RiskLevel::Critical)
}
