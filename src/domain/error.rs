use std::fmt;
use std::io;

use thiserror::Error;

/// Profile sources devsum knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    GitHub,
    LeetCode,
    Geeks,
}

impl SourceKind {
    /// Stable key used in JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            SourceKind::GitHub => "github",
            SourceKind::LeetCode => "leetcode",
            SourceKind::Geeks => "geeks",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::GitHub => "GitHub",
            SourceKind::LeetCode => "LeetCode",
            SourceKind::Geeks => "GeeksforGeeks",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Failure of a single upstream fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Upstream answered 404 or reported an unknown user.
    #[error("profile not found")]
    NotFound,

    /// Upstream answered 429.
    #[error("rate limited by upstream")]
    RateLimited,

    /// Connection, DNS, or timeout failure.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Any other non-success status.
    #[error("upstream unavailable (status {0})")]
    UpstreamUnavailable(u16),

    /// Body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Library-wide error type for devsum operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON output could not be produced.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single source fetch failed where no degradation applies.
    #[error("{kind} request failed: {error}")]
    Source { kind: SourceKind, error: SourceError },

    /// One of several sources failed but aggregation continued.
    #[error("{kind} data degraded: {cause}")]
    PartialDataDegraded { kind: SourceKind, cause: SourceError },

    /// Every required source failed; nothing to summarize.
    #[error("All profile sources failed (GitHub: {github}; LeetCode: {leetcode})")]
    AllSourcesFailed { github: SourceError, leetcode: SourceError },

    /// Generative-text service failure.
    #[error("Summary generation failed: {0}")]
    Generation(String),

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn source_failure(kind: SourceKind, error: SourceError) -> Self {
        AppError::Source { kind, error }
    }
}
