use crate::domain::SourceKind;
use crate::domain::normalize::fragment::{FieldValue, FragmentLine, NormalizedFragment};
use crate::domain::profile::GeeksProfile;

pub const GEEKS_LABELS: [&str; 3] = ["Username", "Name", "Stats"];

pub fn geeks_fragment(profile: &GeeksProfile) -> NormalizedFragment {
    let stats =
        profile.stats.iter().map(|(key, value)| format!("{}: {}", key, value)).collect();

    NormalizedFragment::new(
        SourceKind::Geeks,
        vec![
            FragmentLine::single("Username", FieldValue::text(&profile.username)),
            FragmentLine::single("Name", FieldValue::optional(profile.name.as_ref())),
            FragmentLine::single("Stats", FieldValue::List(stats)),
        ],
    )
}
