//! Aggregate profiles and request an AI summary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::commands::aggregate::{self, AggregateRequest, DegradedSource};
use crate::domain::{AppError, build_prompt};
use crate::ports::{CodeJudgeSource, JudgeSiteSource, SourceHostSource, SummaryGenerator};

/// Summary text plus per-source errors for degraded sources.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutcome {
    pub summary: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<&'static str, String>,
    #[serde(skip)]
    pub degraded: Vec<DegradedSource>,
}

/// Fetch, normalize, build the prompt, then call the generator exactly once.
///
/// The generator is never called when aggregation fails.
pub fn execute<C, H, S, G>(
    ctx: &AppContext<C, H, S>,
    request: AggregateRequest<'_>,
    generator: &G,
) -> Result<SummaryOutcome, AppError>
where
    C: CodeJudgeSource,
    H: SourceHostSource,
    S: JudgeSiteSource,
    G: SummaryGenerator,
{
    let aggregated = aggregate::collect_fragments(ctx, request)?;
    let prompt = build_prompt(&aggregated.fragments)?;
    let summary = generator.generate(&prompt)?;

    let errors = aggregated
        .degraded
        .iter()
        .map(|degraded| (degraded.kind.key(), degraded.to_error().to_string()))
        .collect();

    Ok(SummaryOutcome { summary, errors, degraded: aggregated.degraded })
}
