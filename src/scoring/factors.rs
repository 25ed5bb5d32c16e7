use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::ConfidenceConfig;
use super::tables;
use crate::startup::StartupDescription;

const POSITIVE_THRESHOLD: u8 = 70;
const NEGATIVE_THRESHOLD: u8 = 50;
const NEUTRAL_FACTOR_SCORE: u8 = 50;

/// One scored dimension of a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorKind {
    #[serde(rename = "Team & Leadership")]
    TeamLeadership,
    #[serde(rename = "Funding")]
    Funding,
    #[serde(rename = "Market Opportunity")]
    MarketOpportunity,
    #[serde(rename = "Competition")]
    Competition,
    #[serde(rename = "Product Readiness")]
    ProductReadiness,
    #[serde(rename = "Business Model Clarity")]
    BusinessModelClarity,
}

impl FactorKind {
    pub fn name(&self) -> &'static str {
        match self {
            FactorKind::TeamLeadership => "Team & Leadership",
            FactorKind::Funding => "Funding",
            FactorKind::MarketOpportunity => "Market Opportunity",
            FactorKind::Competition => "Competition",
            FactorKind::ProductReadiness => "Product Readiness",
            FactorKind::BusinessModelClarity => "Business Model Clarity",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn from_score(score: u8) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Impact::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Impact::Negative
        } else {
            Impact::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFactor {
    #[serde(rename = "name")]
    pub kind: FactorKind,
    pub score: u8,
    pub impact: Impact,
}

impl KeyFactor {
    fn new(kind: FactorKind, score: u8) -> Self {
        Self {
            kind,
            score,
            impact: Impact::from_score(score),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => f.write_str("Low"),
            Confidence::Medium => f.write_str("Medium"),
            Confidence::High => f.write_str("High"),
        }
    }
}

/// Build one factor per dimension, most salient (highest score) first.
///
/// The sort is stable, so ties keep the dimension order.
pub fn build_key_factors(desc: &StartupDescription) -> Vec<KeyFactor> {
    let team = mean_factor(&[
        tables::team_size(desc.team_size).factor,
        tables::founder_experience(desc.founder_experience).factor,
    ]);
    let funding = mean_factor(&[tables::funding_amount(desc.funding_amount).factor]);
    let market = mean_factor(&[
        tables::industry(desc.industry).factor,
        tables::target_market(desc.target_market).factor,
    ]);
    let competition = mean_factor(&[tables::competition(desc.competition_level).factor]);
    let product = mean_factor(&[tables::product_stage(desc.product_stage).factor]);
    let clarity = mean_factor(&[tables::business_model_clarity(&desc.business_model).factor]);

    let mut factors = vec![
        KeyFactor::new(FactorKind::TeamLeadership, team),
        KeyFactor::new(FactorKind::Funding, funding),
        KeyFactor::new(FactorKind::MarketOpportunity, market),
        KeyFactor::new(FactorKind::Competition, competition),
        KeyFactor::new(FactorKind::ProductReadiness, product),
        KeyFactor::new(FactorKind::BusinessModelClarity, clarity),
    ];
    factors.sort_by(|a, b| b.score.cmp(&a.score));
    factors
}

/// Average the known factor scores, rounding half away from zero.
/// With nothing known the factor sits at the neutral midpoint.
fn mean_factor(scores: &[Option<u8>]) -> u8 {
    let known: Vec<f64> = scores.iter().flatten().map(|s| f64::from(*s)).collect();
    if known.is_empty() {
        return NEUTRAL_FACTOR_SCORE;
    }
    let mean = known.iter().sum::<f64>() / known.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// Population standard deviation of the factor scores.
pub fn factor_spread(factors: &[KeyFactor]) -> f64 {
    if factors.is_empty() {
        return 0.0;
    }
    let n = factors.len() as f64;
    let mean = factors.iter().map(|f| f64::from(f.score)).sum::<f64>() / n;
    let variance = factors
        .iter()
        .map(|f| (f64::from(f.score) - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Tight agreement across factors is High confidence, wide disagreement Low.
pub fn classify_confidence(factors: &[KeyFactor], thresholds: &ConfidenceConfig) -> Confidence {
    let spread = factor_spread(factors);
    if spread <= thresholds.high_max_spread {
        Confidence::High
    } else if spread <= thresholds.medium_max_spread {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup::*;

    fn sample_description() -> StartupDescription {
        StartupDescription {
            company_name: "Acme".to_string(),
            industry: Industry::Tech,
            founding_year: "2020".to_string(),
            team_size: TeamSize::ElevenToTwenty,
            founder_experience: FounderExperience::Serial,
            funding_amount: FundingAmount::SeriesB,
            product_stage: ProductStage::Growth,
            target_market: TargetMarket::Enterprise,
            competition_level: 10,
            business_model: "word ".repeat(60),
        }
    }

    fn factor(kind: FactorKind, score: u8) -> KeyFactor {
        KeyFactor::new(kind, score)
    }

    #[test]
    fn test_impact_thresholds() {
        assert_eq!(Impact::from_score(70), Impact::Positive);
        assert_eq!(Impact::from_score(69), Impact::Neutral);
        assert_eq!(Impact::from_score(50), Impact::Neutral);
        assert_eq!(Impact::from_score(49), Impact::Negative);
    }

    #[test]
    fn test_mean_factor_rounds_half_up() {
        // (85 + 88) / 2 = 86.5
        assert_eq!(mean_factor(&[Some(85), Some(88)]), 87);
    }

    #[test]
    fn test_mean_factor_skips_unknown() {
        assert_eq!(mean_factor(&[None, Some(80)]), 80);
        assert_eq!(mean_factor(&[None, None]), 50);
    }

    #[test]
    fn test_one_factor_per_dimension() {
        let factors = build_key_factors(&sample_description());
        assert_eq!(factors.len(), 6);
        let score_of = |kind| factors.iter().find(|f| f.kind == kind).unwrap().score;
        assert_eq!(score_of(FactorKind::TeamLeadership), 87);
        assert_eq!(score_of(FactorKind::Funding), 90);
        assert_eq!(score_of(FactorKind::MarketOpportunity), 80);
        assert_eq!(score_of(FactorKind::Competition), 90);
        assert_eq!(score_of(FactorKind::ProductReadiness), 90);
        assert_eq!(score_of(FactorKind::BusinessModelClarity), 85);
    }

    #[test]
    fn test_factors_sorted_descending_with_stable_ties() {
        let factors = build_key_factors(&sample_description());
        assert!(factors.windows(2).all(|w| w[0].score >= w[1].score));
        // Funding, Competition and Product Readiness tie at 90 and keep dimension order
        let kinds: Vec<FactorKind> = factors.iter().take(3).map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FactorKind::Funding,
                FactorKind::Competition,
                FactorKind::ProductReadiness
            ]
        );
    }

    #[test]
    fn test_spread_of_identical_scores_is_zero() {
        let factors = vec![
            factor(FactorKind::Funding, 60),
            factor(FactorKind::Competition, 60),
        ];
        assert_eq!(factor_spread(&factors), 0.0);
    }

    #[test]
    fn test_spread_population_std_dev() {
        let factors = vec![
            factor(FactorKind::Funding, 40),
            factor(FactorKind::Competition, 80),
        ];
        assert!((factor_spread(&factors) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_confidence() {
        let thresholds = ConfidenceConfig::default();
        let tight = vec![
            factor(FactorKind::Funding, 70),
            factor(FactorKind::Competition, 80),
        ];
        let medium = vec![
            factor(FactorKind::Funding, 50),
            factor(FactorKind::Competition, 80),
        ];
        let wide = vec![
            factor(FactorKind::Funding, 20),
            factor(FactorKind::Competition, 90),
        ];
        assert_eq!(classify_confidence(&tight, &thresholds), Confidence::High);
        assert_eq!(classify_confidence(&medium, &thresholds), Confidence::Medium);
        assert_eq!(classify_confidence(&wide, &thresholds), Confidence::Low);
    }

    #[test]
    fn test_key_factor_serializes_name_and_impact() {
        let value = serde_json::to_value(factor(FactorKind::TeamLeadership, 45)).unwrap();
        assert_eq!(value["name"], "Team & Leadership");
        assert_eq!(value["score"], 45);
        assert_eq!(value["impact"], "negative");
    }
}
