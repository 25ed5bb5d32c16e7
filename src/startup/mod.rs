pub mod types;
pub mod validation;

pub use types::{
    FounderExperience, FundingAmount, Industry, ProductStage, StartupDescription, TargetMarket,
    TeamSize,
};
pub use validation::validate_description;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a startup description from a YAML file.
///
/// JSON is accepted too, since the camelCase JSON the web form posts is valid YAML.
/// Unrecognized categorical values load as `Unknown`; use
/// [`validate_description`] to reject them.
pub fn load_description(path: &Path) -> Result<StartupDescription> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read startup description at {}", path.display()))?;

    let desc: StartupDescription = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse startup description: invalid YAML in {}",
            path.display()
        )
    })?;

    Ok(desc)
}
