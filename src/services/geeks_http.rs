//! GeeksforGeeks profile scraper.
//!
//! The page markup is not a stable contract. Extraction is best-effort:
//! anything that cannot be found yields empty fields rather than an error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::{AppError, GeeksConfig, GeeksProfile, HttpConfig, SourceError};
use crate::ports::JudgeSiteSource;
use crate::services::http;

static PROFILE_NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1.profile-name").expect("profile name selector must parse")
});

static PROFILE_STATS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.profile-stats").expect("profile stats selector must parse")
});

static STAT_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.stat").expect("stat span selector must parse"));

/// HTTP client for GeeksforGeeks profile pages.
#[derive(Debug, Clone)]
pub struct HttpGeeksClient {
    profile_url: Url,
    client: Client,
}

impl HttpGeeksClient {
    pub fn new(http: &HttpConfig, config: &GeeksConfig) -> Result<Self, AppError> {
        Ok(Self { profile_url: config.profile_url.clone(), client: http::build_client(http)? })
    }
}

impl JudgeSiteSource for HttpGeeksClient {
    fn fetch_profile(&self, username: &str) -> Result<GeeksProfile, SourceError> {
        let url = http::endpoint(&self.profile_url, &[username, ""])?;
        tracing::debug!(%url, "fetching GeeksforGeeks profile page");

        let response = http::send(self.client.get(url))?;
        let html = response.text().map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

        let profile = extract_profile(username, &html);
        if profile.name.is_none() && profile.stats.is_empty() {
            tracing::warn!(username, "GeeksforGeeks page had no recognizable profile markup");
        }
        Ok(profile)
    }
}

/// Pull the display name and `Key: Value` stats out of a profile page.
///
/// Only the first `profile-stats` block is read; every `stat` span beneath
/// it counts, however deeply nested.
pub fn extract_profile(username: &str, html: &str) -> GeeksProfile {
    let document = Html::parse_document(html);

    let name = document
        .select(&PROFILE_NAME)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty());

    let mut stats = BTreeMap::new();
    if let Some(block) = document.select(&PROFILE_STATS).next() {
        for span in block.select(&STAT_SPAN) {
            let text = element_text(span);
            if let Some((key, value)) = text.split_once(':') {
                stats.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    GeeksProfile { username: username.to_string(), name, stats }
}

/// All descendant text, whitespace collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
