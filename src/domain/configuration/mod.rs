pub mod loader;
pub mod settings;

pub use loader::parse_config_content;
pub use settings::{
    DevsumConfig, GeeksConfig, GeminiConfig, GitHubConfig, HttpConfig, LeetCodeConfig,
};
