use super::config::ScoringConfig;
use std::time::Duration;

const MAX_LATENCY: Duration = Duration::from_secs(10);

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(base) = config.base_score {
        if !(0..=100).contains(&base) {
            errors.push(format!("scoring.base_score: {} is outside 0-100", base));
        }
    }

    if let Some(ref latency) = config.latency {
        match humantime::parse_duration(latency.trim()) {
            Ok(d) if d > MAX_LATENCY => {
                errors.push(format!(
                    "scoring.latency: '{}' exceeds the {}s maximum",
                    latency,
                    MAX_LATENCY.as_secs()
                ));
            }
            Ok(_) => {}
            Err(e) => {
                errors.push(format!("scoring.latency: invalid format '{}' - {}", latency, e));
            }
        }
    }

    if let Some(ref confidence) = config.confidence {
        if confidence.high_max_spread < 0.0 {
            errors.push("scoring.confidence.high_max_spread: must be non-negative".to_string());
        }
        if confidence.medium_max_spread < 0.0 {
            errors.push("scoring.confidence.medium_max_spread: must be non-negative".to_string());
        }
        if confidence.high_max_spread > confidence.medium_max_spread {
            errors.push(format!(
                "scoring.confidence: high_max_spread ({}) must not exceed medium_max_spread ({})",
                confidence.high_max_spread, confidence.medium_max_spread
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
