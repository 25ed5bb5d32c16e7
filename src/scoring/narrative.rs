//! Deterministic text templates for strengths, weaknesses and recommendations.
//!
//! Each factor has one template per input branch, so the same description
//! always produces the same text.

use super::factors::{FactorKind, Impact, KeyFactor};
use crate::startup::{FounderExperience, FundingAmount, ProductStage, StartupDescription, TeamSize};

const MAX_STRENGTHS: usize = 3;
const MAX_WEAKNESSES: usize = 3;
const RECOMMENDED_FACTORS: usize = 3;
const WEAKNESS_SCORE: u8 = 60;
const CROWDED_MARKET_LEVEL: u8 = 50;

pub const NO_STRENGTHS: &str = "No significant strengths detected";
pub const NO_WEAKNESSES: &str = "No significant weaknesses detected";
pub const NO_RECOMMENDATIONS: &str = "General recommendation: continue monitoring key metrics";
pub const GENERAL_RECOMMENDATION: &str =
    "Focus on building a sustainable growth model with clear unit economics";

/// Positive factors, most salient first.
pub fn strengths(factors: &[KeyFactor], desc: &StartupDescription) -> Vec<String> {
    let lines = factors
        .iter()
        .filter(|f| f.impact == Impact::Positive)
        .take(MAX_STRENGTHS)
        .map(|f| strength_for(f.kind, desc))
        .collect();
    or_placeholder(lines, NO_STRENGTHS)
}

/// Negative or below-par factors, most severe first.
pub fn weaknesses(factors: &[KeyFactor], desc: &StartupDescription) -> Vec<String> {
    let lines = factors
        .iter()
        .rev()
        .filter(|f| f.impact == Impact::Negative || f.score < WEAKNESS_SCORE)
        .take(MAX_WEAKNESSES)
        .map(|f| weakness_for(f.kind, desc))
        .collect();
    or_placeholder(lines, NO_WEAKNESSES)
}

/// One suggestion per lowest-scoring factor, then the general best practice.
pub fn recommendations(factors: &[KeyFactor], desc: &StartupDescription) -> Vec<String> {
    let mut lines: Vec<String> = factors
        .iter()
        .rev()
        .take(RECOMMENDED_FACTORS)
        .map(|f| recommendation_for(f, desc))
        .collect();
    lines.push(GENERAL_RECOMMENDATION.to_string());
    or_placeholder(lines, NO_RECOMMENDATIONS)
}

fn or_placeholder(lines: Vec<String>, placeholder: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![placeholder.to_string()]
    } else {
        lines
    }
}

fn strength_for(kind: FactorKind, desc: &StartupDescription) -> String {
    match kind {
        FactorKind::TeamLeadership => match desc.founder_experience {
            FounderExperience::PrevSuccess => {
                "Founders bring a previous successful exit".to_string()
            }
            FounderExperience::Serial => {
                "Serial entrepreneurs with a track record of building companies".to_string()
            }
            FounderExperience::IndustryExpert => {
                "Deep industry expertise in the founding team".to_string()
            }
            _ => format!(
                "Well-staffed team ({}) able to execute in parallel",
                desc.team_size.label()
            ),
        },
        FactorKind::Funding => format!(
            "Well-funded with adequate runway ({})",
            desc.funding_amount.label()
        ),
        FactorKind::MarketOpportunity => format!(
            "{} serving the {} segment offers strong growth potential",
            desc.industry.label(),
            desc.target_market.label()
        ),
        FactorKind::Competition => "Operates in a market with limited competition".to_string(),
        FactorKind::ProductReadiness => format!(
            "Product is mature and market-tested ({})",
            desc.product_stage.label()
        ),
        FactorKind::BusinessModelClarity => {
            "Business model is clearly articulated".to_string()
        }
    }
}

fn weakness_for(kind: FactorKind, desc: &StartupDescription) -> String {
    match kind {
        FactorKind::TeamLeadership => {
            if desc.team_size == TeamSize::Solo {
                "Solo founder carries every role, which limits execution speed".to_string()
            } else if desc.founder_experience == FounderExperience::FirstTime {
                "Limited founder experience in this industry".to_string()
            } else if desc.team_size == TeamSize::TwoToFive {
                "Small team may struggle to scale quickly".to_string()
            } else {
                "Team and leadership profile is not yet a differentiator".to_string()
            }
        }
        FactorKind::Funding => match desc.funding_amount {
            FundingAmount::Bootstrap => "Bootstrapped with limited runway for growth".to_string(),
            _ => "Potential funding challenges or limited runway".to_string(),
        },
        FactorKind::MarketOpportunity => format!(
            "{} targeting the {} segment shows a modest market opportunity",
            desc.industry.label(),
            desc.target_market.label()
        ),
        FactorKind::Competition => format!(
            "Highly competitive market landscape (competition level {})",
            desc.competition_level
        ),
        FactorKind::ProductReadiness => format!(
            "Early product stage ({}) with unproven market fit",
            desc.product_stage.label()
        ),
        FactorKind::BusinessModelClarity => {
            "Business model description is too thin to show how the company makes money"
                .to_string()
        }
    }
}

fn recommendation_for(factor: &KeyFactor, desc: &StartupDescription) -> String {
    let strong = factor.impact == Impact::Positive;
    match factor.kind {
        FactorKind::TeamLeadership => {
            if desc.team_size == TeamSize::Solo {
                "Consider bringing on a co-founder with complementary skills".to_string()
            } else if desc.founder_experience == FounderExperience::FirstTime {
                "Consider bringing on advisors or mentors with industry experience".to_string()
            } else if strong {
                "Keep investing in leadership depth as the team grows".to_string()
            } else {
                "Hire for the skill gaps that most limit execution over the next two quarters"
                    .to_string()
            }
        }
        FactorKind::Funding => {
            if desc.funding_amount == FundingAmount::Bootstrap {
                "Explore angel or seed funding, or optimize for capital efficiency".to_string()
            } else if strong {
                "Tie spending milestones to measurable traction to protect runway".to_string()
            } else {
                "Explore additional funding options or optimize for capital efficiency"
                    .to_string()
            }
        }
        FactorKind::MarketOpportunity => {
            if strong {
                format!(
                    "Double down on the {} segment while demand is strong",
                    desc.target_market.label()
                )
            } else {
                format!(
                    "Validate demand in the {} segment before expanding to adjacent markets",
                    desc.target_market.label()
                )
            }
        }
        FactorKind::Competition => {
            if desc.competition_level > CROWDED_MARKET_LEVEL {
                "Develop a clear differentiation strategy from competitors".to_string()
            } else {
                "Use the relatively open market to lock in early customers before competitors arrive"
                    .to_string()
            }
        }
        FactorKind::ProductReadiness => match desc.product_stage {
            ProductStage::Idea => {
                "Build a minimum viable product and test it with real users".to_string()
            }
            ProductStage::Mvp => {
                "Accelerate product development with focused MVP testing".to_string()
            }
            ProductStage::Beta => {
                "Convert beta users into paying customers and track retention".to_string()
            }
            ProductStage::Launched | ProductStage::Growth => {
                "Invest in retention and expansion metrics to sustain product growth".to_string()
            }
            ProductStage::Unknown => {
                "Define clear product milestones and track progress against them".to_string()
            }
        },
        FactorKind::BusinessModelClarity => {
            if strong {
                "Stress-test the unit economics behind the business model with real numbers"
                    .to_string()
            } else {
                "Write down who pays, how much, and through which channel".to_string()
            }
        }
    }
}
