mod builder;

pub use builder::{INSTRUCTION_SUFFIX, Prompt, build_prompt};
