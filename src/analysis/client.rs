use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{AnalysisError, GENERIC_FAILURE_MESSAGE};
use super::types::{parse_analysis_body, AnalysisResponse};

pub const DEFAULT_API_URL: &str = "https://start-up-seer-ai.onrender.com";
pub const ANALYZE_PATH: &str = "/analyze-pdf/";
pub const PDF_MIME: &str = "application/pdf";
/// Size limit the upload form advertises. Not enforced.
pub const ADVERTISED_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Client for the remote PDF analysis service.
///
/// One request per call: no retries and no timeout beyond the transport defaults.
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self, AnalysisError> {
        // Already installed by an earlier client is fine
        let _ = rustls::crypto::ring::default_provider().install_default();

        let client = Client::builder()
            .user_agent(concat!("startup-seer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }

    /// Upload a PDF and return the service's analysis.
    ///
    /// The file is checked locally first; a missing or non-PDF file fails
    /// without touching the network.
    pub async fn analyze_pdf(&self, path: &Path) -> Result<AnalysisResponse, AnalysisError> {
        check_pdf(path)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AnalysisError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if bytes.len() as u64 > ADVERTISED_MAX_BYTES {
            warn!(
                "{} is {} bytes, above the advertised 10MB limit; sending anyway",
                path.display(),
                bytes.len()
            );
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        let part = Part::bytes(bytes).file_name(file_name).mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        let endpoint = self.endpoint();
        debug!("POST {}", endpoint);

        let res = self.client.post(&endpoint).multipart(form).send().await?;
        let status = res.status();
        let body = res.text().await?;
        debug!("analysis service answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                body
            };
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_analysis_body(&body)
    }
}

/// Local checks done before any upload: the path must be a regular file
/// whose type, judged by extension, is PDF.
pub fn check_pdf(path: &Path) -> Result<(), AnalysisError> {
    if !path.is_file() {
        return Err(AnalysisError::MissingFile(path.to_path_buf()));
    }
    if mime_for_path(path) != Some(PDF_MIME) {
        return Err(AnalysisError::NotPdf(path.to_path_buf()));
    }
    Ok(())
}

fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("pdf") {
        Some(PDF_MIME)
    } else {
        None
    }
}
