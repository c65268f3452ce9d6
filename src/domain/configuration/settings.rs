//! Endpoint and transport configuration for profile aggregation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `devsum.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevsumConfig {
    /// Shared HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// LeetCode GraphQL settings.
    #[serde(default)]
    pub leetcode: LeetCodeConfig,
    /// GitHub REST settings.
    #[serde(default)]
    pub github: GitHubConfig,
    /// GeeksforGeeks profile page settings.
    #[serde(default)]
    pub geeks: GeeksConfig,
    /// Gemini generateContent settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl DevsumConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.http.validate()?;
        validate_http_url("leetcode.graphql_url", &self.leetcode.graphql_url)?;
        validate_http_url("github.api_url", &self.github.api_url)?;
        validate_http_url("geeks.profile_url", &self.geeks.profile_url)?;
        self.gemini.validate()?;
        Ok(())
    }
}

/// HTTP transport configuration shared by every client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent header sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: default_timeout(), user_agent: default_user_agent() }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::InvalidConfig("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeetCodeConfig {
    /// GraphQL endpoint.
    #[serde(default = "default_leetcode_url")]
    pub graphql_url: Url,
    /// Request per-level skill tag counts.
    #[serde(default = "default_true")]
    pub include_skills: bool,
}

impl Default for LeetCodeConfig {
    fn default() -> Self {
        Self { graphql_url: default_leetcode_url(), include_skills: default_true() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// REST API root; `/users/{name}` is appended.
    #[serde(default = "default_github_url")]
    pub api_url: Url,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self { api_url: default_github_url() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeeksConfig {
    /// Profile page root; `/{name}/` is appended.
    #[serde(default = "default_geeks_url")]
    pub profile_url: Url,
}

impl Default for GeeksConfig {
    fn default() -> Self {
        Self { profile_url: default_geeks_url() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API root; `/v1beta/models/{model}:generateContent` is appended.
    #[serde(default = "default_gemini_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self { api_url: default_gemini_url(), model: default_gemini_model() }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_http_url("gemini.api_url", &self.api_url)?;
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("gemini.model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, url: &Url) -> Result<(), AppError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidConfig(format!(
            "{} must use http or https (got '{}')",
            field, other
        ))),
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_leetcode_url() -> Url {
    Url::parse("https://leetcode.com/graphql").expect("Default LeetCode URL must be valid")
}

fn default_github_url() -> Url {
    Url::parse("https://api.github.com").expect("Default GitHub URL must be valid")
}

fn default_geeks_url() -> Url {
    Url::parse("https://auth.geeksforgeeks.org/user")
        .expect("Default GeeksforGeeks URL must be valid")
}

fn default_gemini_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com")
        .expect("Default Gemini URL must be valid")
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}
