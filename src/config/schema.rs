use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the PDF analysis service
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
