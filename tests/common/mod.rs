//! Shared testing utilities for devsum CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use mockito::{Mock, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";

pub const OCTOCAT_USER: &str = r#"{
    "login": "octocat",
    "name": "The Octocat",
    "company": "@github",
    "location": "San Francisco",
    "bio": null,
    "followers": 10,
    "public_repos": 2
}"#;

pub const OCTOCAT_REPOS: &str = r#"[{"name": "Hello-World"}, {"name": "Spoon-Knife"}]"#;

pub const ALICE_LEETCODE: &str = r#"{"data": {"matchedUser": {
    "username": "alice",
    "profile": {"ranking": 1500, "reputation": 12, "solutionCount": 3, "countryName": null},
    "submitStats": {"acSubmissionNum": [
        {"difficulty": "All", "count": 42},
        {"difficulty": "Easy", "count": 30}
    ]}
}}}"#;

/// Testing harness providing an isolated working directory whose
/// `devsum.toml` points every upstream at a local mock server.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    server: ServerGuard,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let server = mockito::Server::new();
        let ctx = Self { root, work_dir, server };
        ctx.write_config();
        ctx
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Config body pointing at the mock server.
    pub fn config_toml(&self) -> String {
        let url = self.server.url();
        format!(
            r#"[http]
timeout_secs = 5

[leetcode]
graphql_url = "{url}/graphql"
include_skills = false

[github]
api_url = "{url}"

[geeks]
profile_url = "{url}/user"

[gemini]
api_url = "{url}"
model = "gemini-test"
"#
        )
    }

    fn write_config(&self) {
        fs::write(self.work_dir.join("devsum.toml"), self.config_toml())
            .expect("Failed to write devsum.toml");
    }

    /// Build a command for the compiled `devsum` binary with an API key set.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }

    /// Build a command for the compiled `devsum` binary with no API key.
    pub fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("devsum").expect("Failed to locate devsum binary");
        cmd.current_dir(&self.work_dir).env_remove("GEMINI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    pub fn mock_github(&mut self, user: &str, body: &str, repos: &str) -> (Mock, Mock) {
        let user_mock = self
            .server
            .mock("GET", format!("/users/{}", user).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();
        let repos_mock = self
            .server
            .mock("GET", format!("/users/{}/repos", user).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(repos)
            .create();
        (user_mock, repos_mock)
    }

    pub fn mock_github_missing(&mut self, user: &str) -> Mock {
        self.server
            .mock("GET", mockito::Matcher::Regex(format!(r"^/users/{}(/repos)?$", user)))
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .expect_at_least(1)
            .create()
    }

    pub fn mock_leetcode(&mut self, body: &str) -> Mock {
        self.server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    pub fn mock_leetcode_missing(&mut self) -> Mock {
        self.mock_leetcode(
            r#"{"data": {"matchedUser": null}, "errors": [{"message": "No such user."}]}"#,
        )
    }

    pub fn mock_geeks(&mut self, user: &str, html: &str) -> Mock {
        self.server
            .mock("GET", format!("/user/{}/", user).as_str())
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(html)
            .create()
    }

    pub fn mock_gemini(&mut self, summary: &str) -> Mock {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": summary}]}}]
        });
        self.server
            .mock("POST", GEMINI_PATH)
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    /// Gemini mock that must never be hit.
    pub fn forbid_gemini(&mut self) -> Mock {
        self.server.mock("POST", GEMINI_PATH).expect(0).create()
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Parse a command's stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
