pub mod client;
pub mod error;
pub mod types;

pub use client::{check_pdf, AnalysisClient, DEFAULT_API_URL};
pub use error::AnalysisError;
pub use types::{parse_analysis_body, AnalysisResponse};
