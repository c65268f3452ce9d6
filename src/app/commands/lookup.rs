//! Single-source lookups mirroring the upstream payloads.

use serde::Serialize;

use crate::domain::{
    AppError, GeeksProfile, GitHubRepo, GitHubUser, LeetCodeProfile, SourceError, SourceKind,
};
use crate::ports::{CodeJudgeSource, JudgeSiteSource, SourceHostSource};

/// Either the fetched value or an `{"error": ...}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part<T> {
    Data(T),
    Failed { error: String },
}

impl<T> Part<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Part::Failed { .. })
    }
}

impl<T> From<Result<T, SourceError>> for Part<T> {
    fn from(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => Part::Data(value),
            Err(error) => Part::Failed { error: error.to_string() },
        }
    }
}

/// GitHub profile and repository listing, each reported independently.
#[derive(Debug, Clone, Serialize)]
pub struct GitHubLookup {
    pub profile: Part<GitHubUser>,
    pub repos: Part<Vec<GitHubRepo>>,
}

impl GitHubLookup {
    /// Whether the profile itself was fetched.
    pub fn has_profile(&self) -> bool {
        !self.profile.is_failed()
    }
}

/// LeetCode profile in its GraphQL envelope.
#[derive(Debug, Clone, Serialize)]
pub struct LeetCodeLookup {
    pub data: LeetCodeData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeData {
    pub matched_user: LeetCodeProfile,
}

pub fn leetcode(source: &impl CodeJudgeSource, username: &str) -> Result<LeetCodeLookup, AppError> {
    let profile = source
        .fetch_profile(username)
        .map_err(|error| AppError::source_failure(SourceKind::LeetCode, error))?;
    Ok(LeetCodeLookup { data: LeetCodeData { matched_user: profile } })
}

pub fn github(source: &impl SourceHostSource, username: &str) -> GitHubLookup {
    let (profile, repos) =
        rayon::join(|| source.fetch_user(username), || source.fetch_repos(username));
    GitHubLookup { profile: profile.into(), repos: repos.into() }
}

pub fn geeks(source: &impl JudgeSiteSource, username: &str) -> Result<GeeksProfile, AppError> {
    source
        .fetch_profile(username)
        .map_err(|error| AppError::source_failure(SourceKind::Geeks, error))
}
