pub mod configuration;
pub mod error;
pub mod normalize;
pub mod profile;
pub mod prompt;

pub use configuration::{
    DevsumConfig, GeeksConfig, GeminiConfig, GitHubConfig, HttpConfig, LeetCodeConfig,
    parse_config_content,
};
pub use error::{AppError, SourceError, SourceKind};
pub use normalize::{FieldValue, FragmentBody, FragmentLine, NormalizedFragment};
pub use profile::{GeeksProfile, GitHubProfile, GitHubRepo, GitHubUser, LeetCodeProfile};
pub use prompt::{Prompt, build_prompt};
