//! Schema-stable representation of one source after defaulting.

use std::fmt;

use crate::domain::SourceKind;

/// Rendered in place of a value the source did not provide.
pub const MISSING_MARKER: &str = "not available";

/// Rendered in place of an empty collection.
pub const EMPTY_MARKER: &str = "none";

/// A single labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Missing,
    List(Vec<String>),
}

impl FieldValue {
    /// Text value, collapsing line breaks so one field never spans prompt lines.
    ///
    /// Blank text counts as missing.
    pub fn text(value: impl AsRef<str>) -> Self {
        let collapsed = value.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() { FieldValue::Missing } else { FieldValue::Text(collapsed) }
    }

    pub fn optional<T: ToString>(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldValue::text(value.to_string()),
            None => FieldValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Missing => f.write_str(MISSING_MARKER),
            FieldValue::List(items) if items.is_empty() => f.write_str(EMPTY_MARKER),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

/// One prompt line: fields rendered as `Label: value`, comma separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentLine {
    fields: Vec<Field>,
}

impl FragmentLine {
    pub fn single(label: &'static str, value: FieldValue) -> Self {
        Self { fields: vec![Field { label, value }] }
    }

    pub fn pair(first: (&'static str, FieldValue), second: (&'static str, FieldValue)) -> Self {
        Self {
            fields: vec![
                Field { label: first.0, value: first.1 },
                Field { label: second.0, value: second.1 },
            ],
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentBody {
    Lines(Vec<FragmentLine>),
    /// The source fetch failed; only a degraded marker is rendered.
    Unavailable,
}

/// Flattened, ordered view of one source profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFragment {
    pub source: SourceKind,
    pub body: FragmentBody,
}

impl NormalizedFragment {
    pub fn new(source: SourceKind, lines: Vec<FragmentLine>) -> Self {
        Self { source, body: FragmentBody::Lines(lines) }
    }

    pub fn unavailable(source: SourceKind) -> Self {
        Self { source, body: FragmentBody::Unavailable }
    }

    /// Section header, e.g. `GitHub Profile`.
    pub fn title(&self) -> String {
        format!("{} Profile", self.source.display_name())
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.body, FragmentBody::Unavailable)
    }

    /// Look up a field by label.
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        match &self.body {
            FragmentBody::Lines(lines) => lines
                .iter()
                .flat_map(|line| line.fields())
                .find(|field| field.label == label)
                .map(|field| &field.value),
            FragmentBody::Unavailable => None,
        }
    }

    /// Labels in rendering order.
    pub fn labels(&self) -> Vec<&'static str> {
        match &self.body {
            FragmentBody::Lines(lines) => {
                lines.iter().flat_map(|line| line.fields()).map(|field| field.label).collect()
            }
            FragmentBody::Unavailable => Vec::new(),
        }
    }

    /// Body lines as they appear under the section header.
    pub fn render_lines(&self) -> Vec<String> {
        match &self.body {
            FragmentBody::Lines(lines) => lines.iter().map(FragmentLine::render).collect(),
            FragmentBody::Unavailable => {
                vec![format!("No {} data available.", self.source.display_name())]
            }
        }
    }
}
