use std::collections::BTreeMap;

use serde::Serialize;

/// Best-effort extraction from a GeeksforGeeks profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeeksProfile {
    pub username: String,
    pub name: Option<String>,
    pub stats: BTreeMap<String, String>,
}

impl GeeksProfile {
    pub fn empty(username: impl Into<String>) -> Self {
        Self { username: username.into(), ..Default::default() }
    }
}
