use serde::{Deserialize, Serialize};

/// The `matchedUser` object of the LeetCode profile query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeProfile {
    pub username: Option<String>,
    pub profile: Option<LeetCodeUserProfile>,
    pub submit_stats: Option<SubmitStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_problem_counts: Option<TagProblemCounts>,
}

impl LeetCodeProfile {
    /// Submission entries, or `None` when the stats block was absent.
    pub fn submissions(&self) -> Option<&[SubmissionCount]> {
        self.submit_stats.as_ref().and_then(|stats| stats.ac_submission_num.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeUserProfile {
    pub real_name: Option<String>,
    pub user_avatar: Option<String>,
    pub about_me: Option<String>,
    pub reputation: Option<i64>,
    pub solution_count: Option<i64>,
    pub post_view_count: Option<i64>,
    pub ranking: Option<i64>,
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    pub ac_submission_num: Option<Vec<SubmissionCount>>,
}

/// Accepted submissions for one difficulty bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCount {
    pub difficulty: Option<String>,
    pub count: Option<i64>,
}

impl SubmissionCount {
    pub fn new(difficulty: impl Into<String>, count: i64) -> Self {
        Self { difficulty: Some(difficulty.into()), count: Some(count) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProblemCounts {
    pub advanced: Option<Vec<TagCount>>,
    pub intermediate: Option<Vec<TagCount>>,
    pub fundamental: Option<Vec<TagCount>>,
}

impl TagProblemCounts {
    pub fn level(&self, level: SkillLevel) -> Option<&[TagCount]> {
        match level {
            SkillLevel::Advanced => self.advanced.as_deref(),
            SkillLevel::Intermediate => self.intermediate.as_deref(),
            SkillLevel::Fundamental => self.fundamental.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    pub tag_name: Option<String>,
    pub tag_slug: Option<String>,
    pub problems_solved: Option<i64>,
}

impl TagCount {
    pub fn new(tag_name: impl Into<String>, problems_solved: i64) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            tag_slug: None,
            problems_solved: Some(problems_solved),
        }
    }
}

/// Skill tiers reported by `tagProblemCounts`, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Advanced,
    Intermediate,
    Fundamental,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] =
        [SkillLevel::Advanced, SkillLevel::Intermediate, SkillLevel::Fundamental];

    /// Prompt label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Advanced => "Advanced Skills",
            SkillLevel::Intermediate => "Intermediate Skills",
            SkillLevel::Fundamental => "Fundamental Skills",
        }
    }
}
