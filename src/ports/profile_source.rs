//! Profile source port definitions.

use crate::domain::{
    GeeksProfile, GitHubProfile, GitHubRepo, GitHubUser, LeetCodeProfile, SourceError,
};

/// Port for the code-judge platform.
pub trait CodeJudgeSource: Send + Sync {
    /// Fetch the matched user for `username`.
    fn fetch_profile(&self, username: &str) -> Result<LeetCodeProfile, SourceError>;

    /// Whether fetched profiles carry per-level skill tag counts.
    fn includes_skills(&self) -> bool;
}

/// Port for the source-hosting platform.
pub trait SourceHostSource: Send + Sync {
    fn fetch_user(&self, username: &str) -> Result<GitHubUser, SourceError>;

    /// Repositories in API order.
    fn fetch_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, SourceError>;

    /// Fetch profile and repositories concurrently.
    ///
    /// Fails only when the profile itself cannot be fetched; a failed
    /// repository listing is kept inside the returned profile.
    fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, SourceError> {
        let (user, repos) =
            rayon::join(|| self.fetch_user(username), || self.fetch_repos(username));
        Ok(GitHubProfile { user: user?, repos })
    }
}

/// Port for the best-effort judge-site scraper.
pub trait JudgeSiteSource: Send + Sync {
    /// Missing markup yields empty fields, not an error.
    fn fetch_profile(&self, username: &str) -> Result<GeeksProfile, SourceError>;
}
