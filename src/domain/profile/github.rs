use serde::{Deserialize, Serialize};

use crate::domain::SourceError;

/// Subset of the GitHub `/users/{name}` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub html_url: Option<String>,
    pub avatar_url: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
}

/// Subset of one entry of the GitHub `/users/{name}/repos` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub fork: Option<bool>,
}

impl GitHubRepo {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }
}

/// Profile plus repository listing for one GitHub user.
///
/// The repository request is independent of the profile request, so its
/// failure is kept alongside a usable profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubProfile {
    pub user: GitHubUser,
    pub repos: Result<Vec<GitHubRepo>, SourceError>,
}
