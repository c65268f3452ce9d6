//! Generative-text service port definition.

use crate::domain::{AppError, Prompt};

/// Port for turning a prompt into summary text.
pub trait SummaryGenerator {
    /// Single attempt; the first candidate's text is returned.
    fn generate(&self, prompt: &Prompt) -> Result<String, AppError>;
}
