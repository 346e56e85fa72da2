// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Risk Classification Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Clamp a cost value to [0, max].
///
/// Unlike a score, a cost that cannot be computed is off the scale, so
/// NaN and +Inf both map to `max` and the gate fails closed. A finite
/// cost above `max` is an ordinary off-the-scale reading.
#[inline]
pub fn clamp_cost(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_cost: NaN detected, clamping to {max:.4}");
        return max;
    }
    if value.is_infinite() && value > 0.0 {
        log::warn!("clamp_cost: Inf detected, clamping to {max:.4}");
        return max;
    }
    if value > max {
        log::debug!("clamp_cost: {value:.4e} exceeds ceiling, clamping to {max:.4}");
        return max;
    }
    value.max(0.0)
}

/// Risk band of a langues cost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Gate decision attached to each risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Quarantine,
    Review,
    Deny,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Exclusive upper bound of the band, as a multiple of the base cost.
    /// `None` for the open-ended CRITICAL band.
    pub const fn upper_multiplier(self) -> Option<f64> {
        match self {
            RiskLevel::Low => Some(1.5),
            RiskLevel::Medium => Some(3.0),
            RiskLevel::High => Some(10.0),
            RiskLevel::Critical => None,
        }
    }

    pub const fn decision(self) -> Decision {
        match self {
            RiskLevel::Low => Decision::Allow,
            RiskLevel::Medium => Decision::Quarantine,
            RiskLevel::High => Decision::Review,
            RiskLevel::Critical => Decision::Deny,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl Decision {
    pub const fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Quarantine => "QUARANTINE",
            Decision::Review => "REVIEW",
            Decision::Deny => "DENY",
        }
    }

    /// Whether the operation may proceed without intervention.
    pub const fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost value together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Langues cost L (clamped, ≥ 0).
    pub cost: f64,
    pub level: RiskLevel,
    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    #[test]
    fn test_clamp_cost_nan_fails_closed() {
        assert_eq!(clamp_cost(f64::NAN, 1e6), 1e6);
    }

    #[test]
    fn test_clamp_cost_pos_inf() {
        assert_eq!(clamp_cost(f64::INFINITY, 1e6), 1e6);
    }

    #[test]
    fn test_clamp_cost_normal() {
        assert_eq!(clamp_cost(26.5, 1e6), 26.5);
        assert_eq!(clamp_cost(2e6, 1e6), 1e6);
        assert_eq!(clamp_cost(-1.0, 1e6), 0.0);
    }

    #[test]
    fn test_clamp_cost_log_levels() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        assert_eq!(clamp_cost(3.5e6, 1e6), 1e6);
        assert_eq!(clamp_cost(f64::NAN, 1e6), 1e6);
        assert_eq!(clamp_cost(f64::INFINITY, 1e6), 1e6);

        let records = RECORDS.lock().unwrap();
        let level_of = |needle: &str| -> Vec<log::Level> {
            records
                .iter()
                .filter(|(_, msg)| msg.contains(needle))
                .map(|(level, _)| *level)
                .collect()
        };
        let ceiling = level_of("exceeds ceiling");
        assert!(!ceiling.is_empty());
        assert!(ceiling.iter().all(|&l| l == log::Level::Debug), "{ceiling:?}");
        let nan = level_of("NaN detected");
        assert!(!nan.is_empty() && nan.iter().all(|&l| l == log::Level::Warn));
        let inf = level_of("Inf detected");
        assert!(!inf.is_empty() && inf.iter().all(|&l| l == log::Level::Warn));
    }

    #[test]
    fn test_level_decision_pairs() {
        assert_eq!(RiskLevel::Low.decision(), Decision::Allow);
        assert_eq!(RiskLevel::Medium.decision(), Decision::Quarantine);
        assert_eq!(RiskLevel::High.decision(), Decision::Review);
        assert_eq!(RiskLevel::Critical.decision(), Decision::Deny);
    }

    #[test]
    fn test_multipliers_increase() {
        let bounds: Vec<f64> = RiskLevel::ALL
            .iter()
            .filter_map(|l| l.upper_multiplier())
            .collect();
        assert_eq!(bounds, vec![1.5, 3.0, 10.0]);
        assert!(RiskLevel::Critical.upper_multiplier().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(Decision::Quarantine.to_string(), "QUARANTINE");
        assert!(Decision::Allow.is_allowed());
        assert!(!Decision::Review.is_allowed());
    }

    #[test]
    fn test_assessment_serde() {
        let a = RiskAssessment {
            cost: 26.5,
            level: RiskLevel::Low,
            decision: Decision::Allow,
        };
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"cost":26.5,"level":"LOW","decision":"ALLOW"}"#);
    }
}
