//! LeetCode GraphQL client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, HttpConfig, LeetCodeConfig, LeetCodeProfile, SourceError};
use crate::ports::CodeJudgeSource;
use crate::services::http;

const PROFILE_FIELDS: &str = "
    username
    profile {
      realName
      userAvatar
      aboutMe
      reputation
      solutionCount
      postViewCount
      ranking
      countryName
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
      }
    }";

const SKILL_FIELDS: &str = "
    tagProblemCounts {
      advanced { tagName tagSlug problemsSolved }
      intermediate { tagName tagSlug problemsSolved }
      fundamental { tagName tagSlug problemsSolved }
    }";

/// GraphQL query text; skill tags are requested only when enabled.
pub fn profile_query(include_skills: bool) -> String {
    let skills = if include_skills { SKILL_FIELDS } else { "" };
    format!(
        "query getUserProfileWithStats($username: String!) {{\n  \
         matchedUser(username: $username) {{{}{}\n  }}\n}}",
        PROFILE_FIELDS, skills
    )
}

/// HTTP client for the LeetCode GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeetCodeClient {
    graphql_url: Url,
    include_skills: bool,
    client: Client,
}

impl HttpLeetCodeClient {
    pub fn new(http: &HttpConfig, config: &LeetCodeConfig) -> Result<Self, AppError> {
        Ok(Self {
            graphql_url: config.graphql_url.clone(),
            include_skills: config.include_skills,
            client: http::build_client(http)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: String,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    username: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ProfileData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    matched_user: Option<LeetCodeProfile>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: Option<String>,
}

impl CodeJudgeSource for HttpLeetCodeClient {
    fn fetch_profile(&self, username: &str) -> Result<LeetCodeProfile, SourceError> {
        tracing::debug!(username, url = %self.graphql_url, "fetching LeetCode profile");

        let request = GraphQlRequest {
            query: profile_query(self.include_skills),
            variables: Variables { username },
        };
        let response = http::send(
            self.client
                .post(self.graphql_url.clone())
                .header(CONTENT_TYPE, "application/json")
                .json(&request),
        )?;
        let body: GraphQlResponse = http::decode(response)?;

        match (body.data, body.errors) {
            (Some(ProfileData { matched_user: Some(profile) }), _) => Ok(profile),
            (Some(ProfileData { matched_user: None }), errors) => {
                let messages = error_messages(errors);
                tracing::debug!(username, ?messages, "LeetCode reported no matched user");
                Err(SourceError::NotFound)
            }
            (None, Some(errors)) => {
                let messages = error_messages(Some(errors));
                tracing::warn!(username, ?messages, "LeetCode query failed without data");
                Err(SourceError::MalformedResponse(format!(
                    "GraphQL errors: {}",
                    messages.join("; ")
                )))
            }
            (None, None) => {
                Err(SourceError::MalformedResponse("response has neither data nor errors".into()))
            }
        }
    }

    fn includes_skills(&self) -> bool {
        self.include_skills
    }
}

fn error_messages(errors: Option<Vec<GraphQlError>>) -> Vec<String> {
    errors.unwrap_or_default().into_iter().filter_map(|error| error.message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server, include_skills: bool) -> HttpLeetCodeClient {
        let config = LeetCodeConfig {
            graphql_url: Url::parse(&format!("{}/graphql", server.url())).unwrap(),
            include_skills,
        };
        HttpLeetCodeClient::new(&HttpConfig { timeout_secs: 1, ..Default::default() }, &config)
            .unwrap()
    }

    #[test]
    fn query_requests_skills_only_when_enabled() {
        assert!(profile_query(true).contains("tagProblemCounts"));
        assert!(!profile_query(false).contains("tagProblemCounts"));
        assert!(profile_query(false).contains("acSubmissionNum"));
    }

    #[test]
    fn fetch_profile_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/graphql")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "variables": {"username": "alice"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data":{"matchedUser":{
                    "username":"alice",
                    "profile":{"ranking":7},
                    "submitStats":{"acSubmissionNum":[]}
                }}}"#,
            )
            .create();

        let profile = client_for(&server, true).fetch_profile("alice").unwrap();

        assert_eq!(profile.username.as_deref(), Some("alice"));
        assert_eq!(profile.profile.unwrap().ranking, Some(7));
        mock.assert();
    }

    #[test]
    fn null_matched_user_is_not_found() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(
                r#"{
                    "errors":[{"message":"That user does not exist."}],
                    "data":{"matchedUser":null}
                }"#,
            )
            .create();

        let result = client_for(&server, false).fetch_profile("ghost");
        assert_eq!(result, Err(SourceError::NotFound));
    }

    #[test]
    fn errors_without_data_keep_the_upstream_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(r#"{"data":null,"errors":[{"message":"Too many requests"}]}"#)
            .create();

        let result = client_for(&server, false).fetch_profile("alice");
        assert_eq!(
            result,
            Err(SourceError::MalformedResponse("GraphQL errors: Too many requests".into()))
        );
    }

    #[test]
    fn non_json_body_is_malformed() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/graphql").with_status(200).with_body("<html>").create();

        let result = client_for(&server, false).fetch_profile("alice");
        assert!(matches!(result, Err(SourceError::MalformedResponse(_))));
    }

    #[test]
    fn empty_object_is_malformed() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/graphql").with_status(200).with_body("{}").create();

        let result = client_for(&server, false).fetch_profile("alice");
        assert!(matches!(result, Err(SourceError::MalformedResponse(_))));
    }

    #[test]
    fn rate_limit_is_reported_without_retry() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/graphql").with_status(429).expect(1).create();

        let result = client_for(&server, false).fetch_profile("alice");
        assert_eq!(result, Err(SourceError::RateLimited));
        mock.assert();
    }
}
