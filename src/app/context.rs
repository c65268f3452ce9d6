use crate::ports::{CodeJudgeSource, JudgeSiteSource, SourceHostSource};

/// Application context holding the profile sources for one invocation.
pub struct AppContext<C: CodeJudgeSource, H: SourceHostSource, S: JudgeSiteSource> {
    code_judge: C,
    source_host: H,
    judge_site: S,
}

impl<C: CodeJudgeSource, H: SourceHostSource, S: JudgeSiteSource> AppContext<C, H, S> {
    /// Create a new application context.
    pub fn new(code_judge: C, source_host: H, judge_site: S) -> Self {
        Self { code_judge, source_host, judge_site }
    }

    /// Get a reference to the code-judge source.
    pub fn code_judge(&self) -> &C {
        &self.code_judge
    }

    /// Get a reference to the source-host source.
    pub fn source_host(&self) -> &H {
        &self.source_host
    }

    /// Get a reference to the judge-site source.
    pub fn judge_site(&self) -> &S {
        &self.judge_site
    }
}
