use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_SCORE: i32 = 60;
pub const DEFAULT_LATENCY: &str = "1500ms";
pub const DEFAULT_HIGH_MAX_SPREAD: f64 = 10.0;
pub const DEFAULT_MEDIUM_MAX_SPREAD: f64 = 20.0;

/// Scoring engine tuning.
///
/// The per-field weight tables are fixed; what can be tuned is the baseline the
/// deltas are added to, how tightly factors must agree for each confidence
/// level, and the simulated latency of a prediction.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   base_score: 55
///   latency: "2s"
///   confidence:
///     high_max_spread: 8
///     medium_max_spread: 18
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Score before any field deltas are applied (default: 60)
    #[serde(default)]
    pub base_score: Option<i32>,

    /// Simulated prediction latency as a humantime duration (default: "1500ms").
    /// "0s" disables the delay.
    #[serde(default)]
    pub latency: Option<String>,

    /// Standard-deviation thresholds for the confidence label
    #[serde(default)]
    pub confidence: Option<ConfidenceConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: Some(DEFAULT_BASE_SCORE),
            latency: Some(DEFAULT_LATENCY.to_string()),
            confidence: Some(ConfidenceConfig::default()),
        }
    }
}

impl ScoringConfig {
    pub fn base_score(&self) -> i32 {
        self.base_score.unwrap_or(DEFAULT_BASE_SCORE)
    }

    /// Parsed latency. Falls back to the default when unset or unparsable;
    /// `validate_scoring` reports the unparsable case at startup.
    pub fn latency(&self) -> Duration {
        self.latency
            .as_deref()
            .and_then(|s| humantime::parse_duration(s.trim()).ok())
            .unwrap_or(Duration::from_millis(1500))
    }

    pub fn confidence(&self) -> ConfidenceConfig {
        self.confidence.clone().unwrap_or_default()
    }
}

/// Factor-score dispersion thresholds.
///
/// A spread at or below `high_max_spread` is High confidence, at or below
/// `medium_max_spread` is Medium, anything wider is Low.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfidenceConfig {
    pub high_max_spread: f64,
    pub medium_max_spread: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            high_max_spread: DEFAULT_HIGH_MAX_SPREAD,
            medium_max_spread: DEFAULT_MEDIUM_MAX_SPREAD,
        }
    }
}
