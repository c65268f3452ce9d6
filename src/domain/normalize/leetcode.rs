use crate::domain::SourceKind;
use crate::domain::normalize::fragment::{FieldValue, FragmentLine, NormalizedFragment};
use crate::domain::profile::{LeetCodeProfile, SkillLevel, SubmissionCount, TagCount};

/// Labels always present in a LeetCode fragment, in rendering order.
///
/// Skill lines follow when the query requested them.
pub const LEETCODE_LABELS: [&str; 6] =
    ["Username", "Rank", "Reputation", "Solutions", "Country", "Submission Stats"];

/// Build the LeetCode fragment.
///
/// `include_skills` mirrors whether the GraphQL query asked for
/// `tagProblemCounts`; skill lines are emitted only in that case.
pub fn leetcode_fragment(profile: &LeetCodeProfile, include_skills: bool) -> NormalizedFragment {
    let details = profile.profile.clone().unwrap_or_default();

    let mut lines = vec![
        FragmentLine::single("Username", FieldValue::optional(profile.username.as_ref())),
        FragmentLine::pair(
            ("Rank", FieldValue::optional(details.ranking)),
            ("Reputation", FieldValue::optional(details.reputation)),
        ),
        FragmentLine::pair(
            ("Solutions", FieldValue::optional(details.solution_count)),
            ("Country", FieldValue::optional(details.country_name.as_ref())),
        ),
        FragmentLine::single("Submission Stats", submissions_value(profile.submissions())),
    ];

    if include_skills {
        let counts = profile.tag_problem_counts.as_ref();
        for level in SkillLevel::ALL {
            let tags = counts.and_then(|counts| counts.level(level));
            lines.push(FragmentLine::single(level.label(), skills_value(tags)));
        }
    }

    NormalizedFragment::new(SourceKind::LeetCode, lines)
}

fn submissions_value(entries: Option<&[SubmissionCount]>) -> FieldValue {
    match entries {
        Some(entries) => FieldValue::List(
            entries
                .iter()
                .map(|entry| {
                    format!(
                        "{}: {}",
                        FieldValue::optional(entry.difficulty.as_ref()),
                        FieldValue::optional(entry.count)
                    )
                })
                .collect(),
        ),
        None => FieldValue::Missing,
    }
}

fn skills_value(tags: Option<&[TagCount]>) -> FieldValue {
    match tags {
        Some(tags) => FieldValue::List(
            tags.iter()
                .map(|tag| {
                    format!(
                        "{} ({})",
                        FieldValue::optional(tag.tag_name.as_ref()),
                        FieldValue::optional(tag.problems_solved)
                    )
                })
                .collect(),
        ),
        None => FieldValue::Missing,
    }
}
