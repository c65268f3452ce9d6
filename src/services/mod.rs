mod gemini_http;
mod geeks_http;
mod github_http;
pub mod http;
mod leetcode_http;

pub use gemini_http::{GEMINI_API_KEY_ENV, HttpGeminiClient};
pub use geeks_http::{HttpGeeksClient, extract_profile as extract_geeks_profile};
pub use github_http::HttpGitHubClient;
pub use leetcode_http::{HttpLeetCodeClient, profile_query};
