//! Shared reqwest plumbing for upstream clients.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, HttpConfig, SourceError};

/// Build a blocking client honoring the configured timeout and User-Agent.
pub fn build_client(config: &HttpConfig) -> Result<Client, AppError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Append path segments to `base`, percent-encoding each one.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, SourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| SourceError::MalformedResponse(format!("cannot extend base URL {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a request once and classify the status.
pub fn send(request: RequestBuilder) -> Result<Response, SourceError> {
    let response = request.send().map_err(|e| SourceError::Unreachable(e.to_string()))?;
    classify_status(response.status())?;
    Ok(response)
}

fn classify_status(status: StatusCode) -> Result<(), SourceError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::NOT_FOUND => Err(SourceError::NotFound),
        StatusCode::TOO_MANY_REQUESTS => Err(SourceError::RateLimited),
        other => Err(SourceError::UpstreamUnavailable(other.as_u16())),
    }
}

/// Decode a JSON body into the expected shape.
pub fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
    response.json::<T>().map_err(|e| SourceError::MalformedResponse(e.to_string()))
}
