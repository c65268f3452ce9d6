//! Gemini generateContent client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiConfig, HttpConfig, Prompt};
use crate::ports::SummaryGenerator;
use crate::services::http;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP client for Gemini.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(
        api_key: String,
        http: &HttpConfig,
        config: &GeminiConfig,
    ) -> Result<Self, AppError> {
        let model_action = format!("{}:generateContent", config.model);
        let endpoint = http::endpoint(&config.api_url, &["v1beta", "models", &model_action])
            .map_err(|e| AppError::Configuration(format!("Invalid Gemini endpoint: {}", e)))?;

        Ok(Self { api_key, endpoint, client: http::build_client(http)? })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(http: &HttpConfig, config: &GeminiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "{} environment variable not set",
                    GEMINI_API_KEY_ENV
                ))
            })?;

        Self::new(api_key, http, config)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl SummaryGenerator for HttpGeminiClient {
    fn generate(&self, prompt: &Prompt) -> Result<String, AppError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt.as_str() }],
            }],
        };

        tracing::info!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.as_str().len(),
            "requesting summary"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Generation(format!(
                "service returned status {}",
                status.as_u16()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {}", e)))?;

        first_candidate_text(body)
    }
}

fn first_candidate_text(body: GenerateResponse) -> Result<String, AppError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Generation("response contained no candidates".into()))?;

    candidate
        .content
        .into_iter()
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .ok_or_else(|| AppError::Generation("first candidate contained no text".into()))
}
