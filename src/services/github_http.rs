//! GitHub REST client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::{AppError, GitHubConfig, GitHubRepo, GitHubUser, HttpConfig, SourceError};
use crate::ports::SourceHostSource;
use crate::services::http;

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// HTTP client for the GitHub users API.
#[derive(Debug, Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    client: Client,
}

impl HttpGitHubClient {
    pub fn new(http: &HttpConfig, config: &GitHubConfig) -> Result<Self, AppError> {
        Ok(Self { api_url: config.api_url.clone(), client: http::build_client(http)? })
    }

    fn get(&self, segments: &[&str]) -> Result<reqwest::blocking::Response, SourceError> {
        let url = http::endpoint(&self.api_url, segments)?;
        tracing::debug!(%url, "requesting GitHub resource");
        http::send(self.client.get(url).header(ACCEPT, GITHUB_V3_JSON))
    }
}

impl SourceHostSource for HttpGitHubClient {
    fn fetch_user(&self, username: &str) -> Result<GitHubUser, SourceError> {
        let response = self.get(&["users", username])?;
        http::decode(response)
    }

    fn fetch_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, SourceError> {
        let response = self.get(&["users", username, "repos"])?;
        http::decode(response)
    }
}
