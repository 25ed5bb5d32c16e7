mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::analysis::DEFAULT_API_URL;

/// Environment variable that overrides the analysis service base URL
pub const ENV_API_URL_VAR: &str = "STARTUP_SEER_API_URL";

/// Get the config directory path (~/.config/startup-seer/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("startup-seer"))
}

/// Get the default config file path (~/.config/startup-seer/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/startup-seer/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error; defaults are used instead.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => match get_config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Resolve the analysis service base URL.
///
/// Precedence: command-line flag, then `STARTUP_SEER_API_URL`, then the config
/// file, then the public default.
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> String {
    resolve_api_url_with_env(flag, std::env::var(ENV_API_URL_VAR).ok(), config)
}

fn resolve_api_url_with_env(flag: Option<&str>, env: Option<String>, config: &Config) -> String {
    let non_empty = |s: &str| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    flag.and_then(non_empty)
        .or_else(|| env.as_deref().and_then(non_empty))
        .or_else(|| config.api_url.as_deref().and_then(non_empty))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
