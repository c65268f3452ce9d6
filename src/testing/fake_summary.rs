use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Prompt};
use crate::ports::SummaryGenerator;

/// Summary generator that records every prompt it receives.
#[derive(Clone, Default)]
pub struct FakeSummaryGenerator {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl FakeSummaryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { fail_with: Some(message.into()), ..Default::default() }
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl SummaryGenerator for FakeSummaryGenerator {
    fn generate(&self, prompt: &Prompt) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        match &self.fail_with {
            Some(message) => Err(AppError::Generation(message.clone())),
            None => Ok("A well-rounded developer.".to_string()),
        }
    }
}
