mod models;

use std::{fs, path::Path};

pub use models::Settings; // Re-export the model type to callers.

pub const ENV_CATALOG_URL: &str = "IMAGINE_PI_CATALOG_URL";
pub const ENV_TIMEOUT_SECS: &str = "IMAGINE_PI_TIMEOUT_SECS";
pub const ENV_MAX_DEPTH: &str = "IMAGINE_PI_MAX_DEPTH";

// ---- Public API (serde hidden from callers) ----

/// Load settings from a JSON file. Keys left out keep their defaults.
pub fn from_file(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let data = fs::read_to_string(path).map_err(SettingsError::Io)?;
    from_json_str(&data)
}

/// Load settings from a JSON string.
pub fn from_json_str(json: &str) -> Result<Settings, SettingsError> {
    serde_json::from_str(json).map_err(SettingsError::Json)
}

/// Overlay `IMAGINE_PI_*` variables from the process environment.
pub fn apply_env(settings: Settings) -> Result<Settings, SettingsError> {
    apply_env_with(settings, |var| std::env::var(var).ok())
}

/// Overlay variables resolved through `lookup`.
pub fn apply_env_with<F>(mut settings: Settings, lookup: F) -> Result<Settings, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_CATALOG_URL) {
        settings.catalog_url = url;
    }
    if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
        settings.timeout_secs = parse_env(ENV_TIMEOUT_SECS, value)?;
    }
    if let Some(value) = lookup(ENV_MAX_DEPTH) {
        settings.max_depth = parse_env(ENV_MAX_DEPTH, value)?;
    }
    Ok(settings)
}

fn parse_env<T: std::str::FromStr>(var: &str, value: String) -> Result<T, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError::InvalidEnv {
        var: var.to_string(),
        value,
    })
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON")]
    Json(#[from] serde_json::Error),
}
