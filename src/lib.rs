//! devsum: aggregate public developer profiles into an AI-generated summary.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AggregateRequest, DegradedSource, GitHubLookup, LeetCodeLookup, Part, PromptPreview,
    SummaryOutcome, geeks, github, leetcode, prompt, summary,
};
pub use domain::{AppError, DevsumConfig, NormalizedFragment, Prompt, SourceError, SourceKind};
