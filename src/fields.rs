//! Profile form fields and their normalization.
//!
//! The portfolio is driven by a fixed set of named inputs. Each input holds a
//! plain string; an input that was never filled in reads as the empty string.
//!
//! ```text
//! name, title, bio, skills,
//! project_title, project_desc, project_link,
//! email, linkedin, github,
//! image_url
//! ```
//!
//! Values come from the `[profile]` table of `folio.toml` and from
//! `--set field=value` edits on the command line. Both go through [`Form`],
//! which only knows the names above: a misspelled field is an error rather
//! than a silently ignored value.
//!
//! ## Reading vs. rendering
//!
//! [`ProfileFields::read`] never substitutes anything. Empty values flow
//! through as empty strings, and the human-readable placeholders ("Your Name",
//! "yourname@example.com", ...) are applied by the renderer. This keeps the
//! raw value available where the placeholder would be wrong, e.g. the
//! `mailto:` target of the email link.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the fixed, named profile inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Title,
    Bio,
    Skills,
    ProjectTitle,
    ProjectDesc,
    ProjectLink,
    Email,
    Linkedin,
    Github,
    ImageUrl,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 11] = [
        FieldId::Name,
        FieldId::Title,
        FieldId::Bio,
        FieldId::Skills,
        FieldId::ProjectTitle,
        FieldId::ProjectDesc,
        FieldId::ProjectLink,
        FieldId::Email,
        FieldId::Linkedin,
        FieldId::Github,
        FieldId::ImageUrl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Title => "title",
            FieldId::Bio => "bio",
            FieldId::Skills => "skills",
            FieldId::ProjectTitle => "project_title",
            FieldId::ProjectDesc => "project_desc",
            FieldId::ProjectLink => "project_link",
            FieldId::Email => "email",
            FieldId::Linkedin => "linkedin",
            FieldId::Github => "github",
            FieldId::ImageUrl => "image_url",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown profile field '{0}' (expected one of: {known})", known = known_fields())]
    Unknown(String),
    #[error("expected FIELD=VALUE, got '{0}'")]
    MalformedAssignment(String),
}

fn known_fields() -> String {
    FieldId::ALL
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for FieldId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Current value of every named input.
///
/// Absent inputs read as `""`. Setting a field never touches the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Form {
    values: BTreeMap<FieldId, String>,
}

impl TryFrom<BTreeMap<String, String>> for Form {
    type Error = FieldError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut form = Form::new();
        for (key, value) in raw {
            form.set(key.parse()?, value);
        }
        Ok(form)
    }
}

impl From<Form> for BTreeMap<String, String> {
    fn from(form: Form) -> Self {
        form.values
            .into_iter()
            .map(|(field, value)| (field.as_str().to_string(), value))
            .collect()
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Parse a `FIELD=VALUE` assignment as given to `--set`.
    ///
    /// Splits on the first `=`, so values may themselves contain `=`
    /// (query strings in URLs). An empty value is a valid assignment that
    /// clears the field.
    pub fn parse_assignment(s: &str) -> Result<(FieldId, String), FieldError> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| FieldError::MalformedAssignment(s.to_string()))?;
        let field = key.trim().parse::<FieldId>()?;
        Ok((field, value.to_string()))
    }
}

/// Snapshot of all profile fields, read fresh for every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileFields {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Comma-separated, exactly as typed. See [`ProfileFields::skills`].
    pub skills_raw: String,
    pub project_title: String,
    pub project_desc: String,
    pub project_link: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Typed image URL. Loses to an uploaded image.
    pub image_url: String,
}

impl ProfileFields {
    /// Read every field's current value. Pure; the form is not modified.
    pub fn read(form: &Form) -> Self {
        let get = |field| form.value(field).to_string();
        Self {
            name: get(FieldId::Name),
            title: get(FieldId::Title),
            bio: get(FieldId::Bio),
            skills_raw: get(FieldId::Skills),
            project_title: get(FieldId::ProjectTitle),
            project_desc: get(FieldId::ProjectDesc),
            project_link: get(FieldId::ProjectLink),
            email: get(FieldId::Email),
            linkedin: get(FieldId::Linkedin),
            github: get(FieldId::Github),
            image_url: get(FieldId::ImageUrl),
        }
    }

    /// The skill list derived from `skills_raw`.
    pub fn skills(&self) -> Vec<&str> {
        parse_skills(&self.skills_raw)
    }
}

/// Split a comma-separated skills string into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept.
pub fn parse_skills(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// `value` unless it is empty, then `fallback`.
pub(crate) fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
