//! Configuration loading from the filesystem and process environment.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, DevsumConfig, parse_config_content};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "devsum.toml";

/// Load configuration from an explicit path, or from `devsum.toml` in the
/// current directory, falling back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<DevsumConfig, AppError> {
    match explicit {
        Some(path) => read_config(path),
        None => load_config_from_dir(&std::env::current_dir()?),
    }
}

/// Load `devsum.toml` from `dir` when present.
pub fn load_config_from_dir(dir: &Path) -> Result<DevsumConfig, AppError> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(dir = %dir.display(), "no config file found; using defaults");
        return Ok(DevsumConfig::default());
    }
    read_config(&path)
}

fn read_config(path: &Path) -> Result<DevsumConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    parse_config_content(&content)
}

/// Populate the process environment from a `.env` file when one exists.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
    }
}
