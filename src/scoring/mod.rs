pub mod config;
pub mod engine;
pub mod factors;
pub mod narrative;
pub mod tables;
pub mod validation;

pub use config::*;
pub use engine::{predict, predict_with_latency, score_breakdown, PredictionResult, ScoreBreakdown};
pub use factors::{Confidence, FactorKind, Impact, KeyFactor};
pub use validation::validate_scoring;
