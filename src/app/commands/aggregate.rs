//! Concurrent fetch of every source and the partial-failure policy.

use crate::app::AppContext;
use crate::domain::normalize::{geeks_fragment, github_fragment, leetcode_fragment};
use crate::domain::{AppError, NormalizedFragment, Prompt, SourceError, SourceKind, build_prompt};
use crate::ports::{CodeJudgeSource, JudgeSiteSource, SourceHostSource};

/// Usernames to aggregate.
#[derive(Debug, Clone, Copy)]
pub struct AggregateRequest<'a> {
    pub github: &'a str,
    pub leetcode: &'a str,
    /// Optional judge-site username; the section is omitted when absent.
    pub geeks: Option<&'a str>,
}

/// A source whose fetch failed while aggregation continued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedSource {
    pub kind: SourceKind,
    pub cause: SourceError,
}

impl DegradedSource {
    pub fn to_error(&self) -> AppError {
        AppError::PartialDataDegraded { kind: self.kind, cause: self.cause.clone() }
    }
}

/// Fragments for every requested source, degraded where fetches failed.
#[derive(Debug, Clone)]
pub struct AggregatedProfile {
    pub fragments: Vec<NormalizedFragment>,
    pub degraded: Vec<DegradedSource>,
}

/// Built prompt plus the sources that were degraded while building it.
#[derive(Debug, Clone)]
pub struct PromptPreview {
    pub prompt: Prompt,
    pub degraded: Vec<DegradedSource>,
}

/// Fetch all sources concurrently and normalize them.
///
/// Fails with `AllSourcesFailed` only when both GitHub and LeetCode fail; the
/// optional judge-site never rescues or sinks an aggregation on its own.
pub fn collect_fragments<C, H, S>(
    ctx: &AppContext<C, H, S>,
    request: AggregateRequest<'_>,
) -> Result<AggregatedProfile, AppError>
where
    C: CodeJudgeSource,
    H: SourceHostSource,
    S: JudgeSiteSource,
{
    let ((github, leetcode), geeks) = rayon::join(
        || {
            rayon::join(
                || ctx.source_host().fetch_profile(request.github),
                || ctx.code_judge().fetch_profile(request.leetcode),
            )
        },
        || request.geeks.map(|username| ctx.judge_site().fetch_profile(username)),
    );

    if let (Err(github), Err(leetcode)) = (&github, &leetcode) {
        tracing::warn!(%github, %leetcode, "every required profile source failed");
        return Err(AppError::AllSourcesFailed {
            github: github.clone(),
            leetcode: leetcode.clone(),
        });
    }

    let mut aggregated = AggregatedProfile { fragments: Vec::new(), degraded: Vec::new() };

    match github {
        Ok(profile) => aggregated.fragments.push(github_fragment(&profile)),
        Err(cause) => aggregated.degrade(SourceKind::GitHub, cause),
    }

    match leetcode {
        Ok(profile) => aggregated
            .fragments
            .push(leetcode_fragment(&profile, ctx.code_judge().includes_skills())),
        Err(cause) => aggregated.degrade(SourceKind::LeetCode, cause),
    }

    match geeks {
        Some(Ok(profile)) => aggregated.fragments.push(geeks_fragment(&profile)),
        Some(Err(cause)) => aggregated.degrade(SourceKind::Geeks, cause),
        None => {}
    }

    Ok(aggregated)
}

impl AggregatedProfile {
    fn degrade(&mut self, kind: SourceKind, cause: SourceError) {
        let degraded = DegradedSource { kind, cause };
        tracing::warn!(error = %degraded.to_error(), "continuing with degraded source");
        self.fragments.push(NormalizedFragment::unavailable(kind));
        self.degraded.push(degraded);
    }
}

/// Aggregate and render the prompt without contacting the summary service.
pub fn preview_prompt<C, H, S>(
    ctx: &AppContext<C, H, S>,
    request: AggregateRequest<'_>,
) -> Result<PromptPreview, AppError>
where
    C: CodeJudgeSource,
    H: SourceHostSource,
    S: JudgeSiteSource,
{
    let aggregated = collect_fragments(ctx, request)?;
    let prompt = build_prompt(&aggregated.fragments)?;
    Ok(PromptPreview { prompt, degraded: aggregated.degraded })
}
