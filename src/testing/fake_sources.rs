use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::profile::{LeetCodeUserProfile, SubmissionCount, SubmitStats};
use crate::domain::{
    GeeksProfile, GitHubRepo, GitHubUser, LeetCodeProfile, SourceError,
};
use crate::ports::{CodeJudgeSource, JudgeSiteSource, SourceHostSource};

/// Code-judge source returning a canned result and counting calls.
#[derive(Debug)]
pub struct FakeCodeJudge {
    result: Result<LeetCodeProfile, SourceError>,
    include_skills: bool,
    calls: AtomicUsize,
}

impl FakeCodeJudge {
    pub fn ok(profile: LeetCodeProfile) -> Self {
        Self { result: Ok(profile), include_skills: false, calls: AtomicUsize::new(0) }
    }

    pub fn failing(error: SourceError) -> Self {
        Self { result: Err(error), include_skills: false, calls: AtomicUsize::new(0) }
    }

    pub fn with_skills(mut self) -> Self {
        self.include_skills = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeJudgeSource for FakeCodeJudge {
    fn fetch_profile(&self, _username: &str) -> Result<LeetCodeProfile, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn includes_skills(&self) -> bool {
        self.include_skills
    }
}

/// Source-host returning canned user and repository results.
#[derive(Debug)]
pub struct FakeSourceHost {
    user: Result<GitHubUser, SourceError>,
    repos: Result<Vec<GitHubRepo>, SourceError>,
}

impl FakeSourceHost {
    pub fn ok(user: GitHubUser, repos: Vec<GitHubRepo>) -> Self {
        Self { user: Ok(user), repos: Ok(repos) }
    }

    pub fn failing(error: SourceError) -> Self {
        Self { user: Err(error.clone()), repos: Err(error) }
    }

    pub fn with_repos(mut self, repos: Result<Vec<GitHubRepo>, SourceError>) -> Self {
        self.repos = repos;
        self
    }
}

impl SourceHostSource for FakeSourceHost {
    fn fetch_user(&self, _username: &str) -> Result<GitHubUser, SourceError> {
        self.user.clone()
    }

    fn fetch_repos(&self, _username: &str) -> Result<Vec<GitHubRepo>, SourceError> {
        self.repos.clone()
    }
}

/// Judge-site source returning a canned result and counting calls.
#[derive(Debug)]
pub struct FakeJudgeSite {
    result: Result<GeeksProfile, SourceError>,
    calls: AtomicUsize,
}

impl FakeJudgeSite {
    pub fn ok(profile: GeeksProfile) -> Self {
        Self { result: Ok(profile), calls: AtomicUsize::new(0) }
    }

    pub fn failing(error: SourceError) -> Self {
        Self { result: Err(error), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl JudgeSiteSource for FakeJudgeSite {
    fn fetch_profile(&self, _username: &str) -> Result<GeeksProfile, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn octocat_user() -> GitHubUser {
    GitHubUser {
        login: Some("octocat".into()),
        name: Some("The Octocat".into()),
        followers: Some(10),
        public_repos: Some(2),
        ..Default::default()
    }
}

pub fn octocat_repos() -> Vec<GitHubRepo> {
    vec![GitHubRepo::named("Hello-World"), GitHubRepo::named("Spoon-Knife")]
}

pub fn alice_leetcode() -> LeetCodeProfile {
    LeetCodeProfile {
        username: Some("alice".into()),
        profile: Some(LeetCodeUserProfile {
            ranking: Some(1500),
            reputation: Some(12),
            ..Default::default()
        }),
        submit_stats: Some(SubmitStats {
            ac_submission_num: Some(vec![SubmissionCount::new("All", 30)]),
        }),
        tag_problem_counts: None,
    }
}
