//! Configuration parsing.

use crate::domain::{AppError, DevsumConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<DevsumConfig, AppError> {
    let config: DevsumConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
