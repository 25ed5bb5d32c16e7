use std::path::PathBuf;
use thiserror::Error;

pub const INVALID_PDF_MESSAGE: &str = "Please upload a valid PDF file.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while analyzing the PDF";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please upload a valid PDF file. No file at {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Please upload a valid PDF file. {} is not a PDF", .0.display())]
    NotPdf(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("analysis service returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl AnalysisError {
    /// True for problems caught before any request was sent.
    pub fn is_client_validation(&self) -> bool {
        matches!(self, AnalysisError::MissingFile(_) | AnalysisError::NotPdf(_))
    }
}
