use serde::{Deserialize, Serialize};

use super::error::AnalysisError;

/// The analysis service's answer, shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(rename = "Business_Health_Assessment")]
    pub business_health_assessment: String,
    #[serde(rename = "Business_Reasoning")]
    pub business_reasoning: String,
    #[serde(rename = "Recommended_Best_Actions")]
    pub recommended_best_actions: Vec<String>,
}

/// Parse a successful response body.
///
/// Besides the plain JSON object, accepts the object encoded as a JSON string,
/// optionally inside a Markdown code fence, which is how the hosted service
/// forwards raw model output.
pub fn parse_analysis_body(body: &str) -> Result<AnalysisResponse, AnalysisError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AnalysisError::InvalidResponse(format!("body is not JSON: {}", e)))?;

    match value {
        serde_json::Value::String(inner) => {
            serde_json::from_str(strip_code_fence(&inner)).map_err(|e| {
                AnalysisError::InvalidResponse(format!("embedded analysis is malformed: {}", e))
            })
        }
        other => serde_json::from_value(other)
            .map_err(|e| AnalysisError::InvalidResponse(format!("unexpected shape: {}", e))),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
