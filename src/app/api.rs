//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together client
//! construction and command execution.

use crate::app::AppContext;
use crate::app::commands::{aggregate, lookup, summary};
use crate::domain::{AppError, DevsumConfig, GeeksProfile};
use crate::services::{HttpGeeksClient, HttpGeminiClient, HttpGitHubClient, HttpLeetCodeClient};

pub use crate::app::commands::aggregate::{AggregateRequest, DegradedSource, PromptPreview};
pub use crate::app::commands::lookup::{GitHubLookup, LeetCodeLookup, Part};
pub use crate::app::commands::summary::SummaryOutcome;

type HttpContext = AppContext<HttpLeetCodeClient, HttpGitHubClient, HttpGeeksClient>;

/// Create an `AppContext` backed by the HTTP clients.
fn create_context(config: &DevsumConfig) -> Result<HttpContext, AppError> {
    Ok(AppContext::new(
        HttpLeetCodeClient::new(&config.http, &config.leetcode)?,
        HttpGitHubClient::new(&config.http, &config.github)?,
        HttpGeeksClient::new(&config.http, &config.geeks)?,
    ))
}

/// Fetch a LeetCode profile in its GraphQL envelope.
pub fn leetcode(username: &str, config: &DevsumConfig) -> Result<LeetCodeLookup, AppError> {
    let client = HttpLeetCodeClient::new(&config.http, &config.leetcode)?;
    lookup::leetcode(&client, username)
}

/// Fetch a GitHub profile and repository listing.
pub fn github(username: &str, config: &DevsumConfig) -> Result<GitHubLookup, AppError> {
    let client = HttpGitHubClient::new(&config.http, &config.github)?;
    Ok(lookup::github(&client, username))
}

/// Scrape a GeeksforGeeks profile page.
pub fn geeks(username: &str, config: &DevsumConfig) -> Result<GeeksProfile, AppError> {
    let client = HttpGeeksClient::new(&config.http, &config.geeks)?;
    lookup::geeks(&client, username)
}

/// Aggregate profiles and request an AI summary.
///
/// The Gemini API key is resolved before any profile is fetched.
pub fn summary(
    request: AggregateRequest<'_>,
    config: &DevsumConfig,
) -> Result<SummaryOutcome, AppError> {
    let generator = HttpGeminiClient::from_env(&config.http, &config.gemini)?;
    let ctx = create_context(config)?;
    summary::execute(&ctx, request, &generator)
}

/// Aggregate profiles and render the prompt without requesting a summary.
pub fn prompt(
    request: AggregateRequest<'_>,
    config: &DevsumConfig,
) -> Result<PromptPreview, AppError> {
    let ctx = create_context(config)?;
    aggregate::preview_prompt(&ctx, request)
}
