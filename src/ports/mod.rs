mod profile_source;
mod summary_generator;

pub use profile_source::{CodeJudgeSource, JudgeSiteSource, SourceHostSource};
pub use summary_generator::SummaryGenerator;
