//! Pure transformations from typed source payloads to prompt fragments.

pub mod fragment;
mod geeks;
mod github;
mod leetcode;

pub use fragment::{
    EMPTY_MARKER, Field, FieldValue, FragmentBody, FragmentLine, MISSING_MARKER,
    NormalizedFragment,
};
pub use geeks::{GEEKS_LABELS, geeks_fragment};
pub use github::{GITHUB_LABELS, REPO_SAMPLE_SIZE, github_fragment, sample_repositories};
pub use leetcode::{LEETCODE_LABELS, leetcode_fragment};
