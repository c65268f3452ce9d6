mod fake_sources;
mod fake_summary;

pub use fake_sources::{
    FakeCodeJudge, FakeJudgeSite, FakeSourceHost, alice_leetcode, octocat_repos, octocat_user,
};
pub use fake_summary::FakeSummaryGenerator;
