//! Typed payloads decoded once at the client boundary.

pub mod geeks;
pub mod github;
pub mod leetcode;

pub use geeks::GeeksProfile;
pub use github::{GitHubProfile, GitHubRepo, GitHubUser};
pub use leetcode::{
    LeetCodeProfile, LeetCodeUserProfile, SkillLevel, SubmissionCount, SubmitStats, TagCount,
    TagProblemCounts,
};
