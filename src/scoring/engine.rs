use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::factors::{build_key_factors, classify_confidence, Confidence, KeyFactor};
use super::narrative;
use super::tables;
use crate::startup::StartupDescription;

/// How much each input moved the headline score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreContribution {
    pub label: &'static str, // e.g. "Team size", "Competition"
    pub value: String,       // input value as shown to the user
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base_score: i32,
    pub contributions: Vec<ScoreContribution>,
    /// Sum before clamping to 0-100
    pub raw_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub score: u8,
    pub confidence: Confidence,
    pub key_factors: Vec<KeyFactor>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Score a startup description. Pure and infallible: unknown categorical
/// values contribute nothing instead of raising an error.
pub fn predict(desc: &StartupDescription, config: &ScoringConfig) -> PredictionResult {
    let breakdown = score_breakdown(desc, config);
    let score = breakdown.raw_score.clamp(0, 100) as u8;

    let key_factors = build_key_factors(desc);
    let confidence = classify_confidence(&key_factors, &config.confidence());

    PredictionResult {
        score,
        confidence,
        strengths: narrative::strengths(&key_factors, desc),
        weaknesses: narrative::weaknesses(&key_factors, desc),
        recommendations: narrative::recommendations(&key_factors, desc),
        key_factors,
    }
}

/// Like [`predict`], after the configured simulated latency.
///
/// The wait is a timer suspension, so other predictions keep running meanwhile.
pub async fn predict_with_latency(
    desc: &StartupDescription,
    config: &ScoringConfig,
) -> PredictionResult {
    let latency = config.latency();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    predict(desc, config)
}

/// Baseline plus every field's delta, before clamping.
pub fn score_breakdown(desc: &StartupDescription, config: &ScoringConfig) -> ScoreBreakdown {
    let base_score = config.base_score();

    let contributions = vec![
        ScoreContribution {
            label: "Team size",
            value: desc.team_size.label().to_string(),
            delta: tables::team_size(desc.team_size).delta,
        },
        ScoreContribution {
            label: "Founder experience",
            value: desc.founder_experience.label().to_string(),
            delta: tables::founder_experience(desc.founder_experience).delta,
        },
        ScoreContribution {
            label: "Funding",
            value: desc.funding_amount.label().to_string(),
            delta: tables::funding_amount(desc.funding_amount).delta,
        },
        ScoreContribution {
            label: "Product stage",
            value: desc.product_stage.label().to_string(),
            delta: tables::product_stage(desc.product_stage).delta,
        },
        ScoreContribution {
            label: "Industry",
            value: desc.industry.label().to_string(),
            delta: tables::industry(desc.industry).delta,
        },
        ScoreContribution {
            label: "Target market",
            value: desc.target_market.label().to_string(),
            delta: tables::target_market(desc.target_market).delta,
        },
        ScoreContribution {
            label: "Competition",
            value: desc.competition_level.to_string(),
            delta: tables::competition(desc.competition_level).delta,
        },
        ScoreContribution {
            label: "Business model clarity",
            value: format!("{} words", desc.business_model.split_whitespace().count()),
            delta: tables::business_model_clarity(&desc.business_model).delta,
        },
    ];

    let raw_score = base_score + contributions.iter().map(|c| c.delta).sum::<i32>();

    ScoreBreakdown {
        base_score,
        contributions,
        raw_score,
    }
}
