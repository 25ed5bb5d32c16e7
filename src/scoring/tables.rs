//! Per-field weight tables.
//!
//! Each categorical field has its own table so it can be tuned independently.
//! A table maps a value to its 0-100 factor score and the delta it contributes
//! to the headline score. `Unknown` values carry no factor score and no delta.

use crate::startup::{
    FounderExperience, FundingAmount, Industry, ProductStage, TargetMarket, TeamSize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weight {
    pub factor: Option<u8>,
    pub delta: i32,
}

impl Weight {
    const NEUTRAL: Weight = Weight {
        factor: None,
        delta: 0,
    };

    const fn new(factor: u8, delta: i32) -> Self {
        Weight {
            factor: Some(factor),
            delta,
        }
    }
}

pub fn team_size(value: TeamSize) -> Weight {
    match value {
        TeamSize::Solo => Weight::new(40, -5),
        TeamSize::TwoToFive => Weight::new(60, 0),
        TeamSize::SixToTen => Weight::new(75, 0),
        TeamSize::ElevenToTwenty => Weight::new(85, 5),
        TeamSize::TwentyOneToFifty => Weight::new(80, 5),
        TeamSize::FiftyPlus => Weight::new(75, 3),
        TeamSize::Unknown => Weight::NEUTRAL,
    }
}

pub fn founder_experience(value: FounderExperience) -> Weight {
    match value {
        FounderExperience::FirstTime => Weight::new(50, 0),
        FounderExperience::PrevFailed => Weight::new(65, 5), // learned from a failure
        FounderExperience::PrevSuccess => Weight::new(90, 15),
        FounderExperience::IndustryExpert => Weight::new(85, 10),
        FounderExperience::Serial => Weight::new(88, 12),
        FounderExperience::Unknown => Weight::NEUTRAL,
    }
}

pub fn funding_amount(value: FundingAmount) -> Weight {
    match value {
        FundingAmount::Bootstrap => Weight::new(50, -5),
        FundingAmount::Angel => Weight::new(65, 3),
        FundingAmount::Seed => Weight::new(75, 5),
        FundingAmount::SeriesA => Weight::new(85, 8),
        FundingAmount::SeriesB => Weight::new(90, 10),
        FundingAmount::Unknown => Weight::NEUTRAL,
    }
}

pub fn product_stage(value: ProductStage) -> Weight {
    match value {
        ProductStage::Idea => Weight::new(30, -10),
        ProductStage::Mvp => Weight::new(50, -5),
        ProductStage::Beta => Weight::new(70, 0),
        ProductStage::Launched => Weight::new(85, 8),
        ProductStage::Growth => Weight::new(90, 12),
        ProductStage::Unknown => Weight::NEUTRAL,
    }
}

pub fn industry(value: Industry) -> Weight {
    match value {
        Industry::Tech => Weight::new(80, 5),
        Industry::Healthcare => Weight::new(75, 3),
        Industry::Finance => Weight::new(70, 2),
        Industry::Ecommerce => Weight::new(65, 0),
        Industry::Education => Weight::new(60, 0),
        Industry::Manufacturing => Weight::new(55, 0),
        Industry::Service => Weight::new(60, 0),
        Industry::Other => Weight::new(50, 0),
        Industry::Unknown => Weight::NEUTRAL,
    }
}

pub fn target_market(value: TargetMarket) -> Weight {
    match value {
        TargetMarket::B2c => Weight::new(70, 0),
        TargetMarket::B2b => Weight::new(75, 2),
        TargetMarket::B2b2c => Weight::new(65, 0),
        TargetMarket::C2c => Weight::new(60, -2),
        TargetMarket::Enterprise => Weight::new(80, 3),
        TargetMarket::Government => Weight::new(65, 0),
        TargetMarket::Unknown => Weight::NEUTRAL,
    }
}

/// Competition maps inversely: the factor score is `100 - level` and the
/// headline penalty is one point per full ten levels.
pub fn competition(level: u8) -> Weight {
    let level = level.min(100);
    Weight::new(100 - level, -i32::from(level / 10))
}

/// Business-model clarity, judged by how many words the description spends.
pub fn business_model_clarity(text: &str) -> Weight {
    match text.split_whitespace().count() {
        0..=9 => Weight::new(40, -3),
        10..=24 => Weight::new(55, 0),
        25..=49 => Weight::new(70, 2),
        _ => Weight::new(85, 4),
    }
}
