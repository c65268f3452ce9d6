use std::fmt;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::normalize::NormalizedFragment;

const TEMPLATE_NAME: &str = "summary_prompt.txt";
const TEMPLATE: &str = include_str!("summary_prompt.txt");

/// Closing instruction appended after every section.
pub const INSTRUCTION_SUFFIX: &str =
    "Provide a concise summary highlighting key metrics and overall strengths.";

/// Prompt text handed to the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize)]
struct Section {
    title: String,
    lines: Vec<String>,
}

/// Render fragments into the summary prompt.
///
/// Sections are ordered by source kind (GitHub, LeetCode, GeeksforGeeks), never
/// by their content or by the order they were passed in.
pub fn build_prompt(fragments: &[NormalizedFragment]) -> Result<Prompt, AppError> {
    let mut ordered: Vec<&NormalizedFragment> = fragments.iter().collect();
    ordered.sort_by_key(|fragment| fragment.source);

    let sections: Vec<Section> = ordered
        .into_iter()
        .map(|fragment| Section { title: fragment.title(), lines: fragment.render_lines() })
        .collect();

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|err| AppError::PromptRender(err.to_string()))?;

    let rendered = env
        .get_template(TEMPLATE_NAME)
        .and_then(|template| template.render(context! { sections => sections }))
        .map_err(|err| AppError::PromptRender(err.to_string()))?;

    Ok(Prompt(rendered))
}
