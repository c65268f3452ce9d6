use crate::domain::SourceKind;
use crate::domain::normalize::fragment::{FieldValue, FragmentLine, NormalizedFragment};
use crate::domain::profile::{GitHubProfile, GitHubRepo};

/// Number of repositories carried into the prompt.
pub const REPO_SAMPLE_SIZE: usize = 5;

/// Every label of a GitHub fragment, in rendering order.
pub const GITHUB_LABELS: [&str; 8] = [
    "Username",
    "Name",
    "Company",
    "Location",
    "Bio",
    "Followers",
    "Repos",
    "Repositories (sample)",
];

/// First repositories in API order; never re-sorted.
pub fn sample_repositories(repos: &[GitHubRepo]) -> &[GitHubRepo] {
    &repos[..repos.len().min(REPO_SAMPLE_SIZE)]
}

pub fn github_fragment(profile: &GitHubProfile) -> NormalizedFragment {
    let user = &profile.user;

    let repositories = match &profile.repos {
        Ok(repos) => FieldValue::List(
            sample_repositories(repos)
                .iter()
                .map(|repo| FieldValue::optional(repo.name.as_ref()).to_string())
                .collect(),
        ),
        Err(_) => FieldValue::Missing,
    };

    NormalizedFragment::new(
        SourceKind::GitHub,
        vec![
            FragmentLine::single("Username", FieldValue::optional(user.login.as_ref())),
            FragmentLine::single("Name", FieldValue::optional(user.name.as_ref())),
            FragmentLine::single("Company", FieldValue::optional(user.company.as_ref())),
            FragmentLine::single("Location", FieldValue::optional(user.location.as_ref())),
            FragmentLine::single("Bio", FieldValue::optional(user.bio.as_ref())),
            FragmentLine::pair(
                ("Followers", FieldValue::optional(user.followers)),
                ("Repos", FieldValue::optional(user.public_repos)),
            ),
            FragmentLine::single("Repositories (sample)", repositories),
        ],
    )
}
