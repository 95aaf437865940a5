//! User-supplied identifiers and the grammars that gate them.
//!
//! # Grammars
//!
//! | Kind            | Characters                 | Case        | Ends with    |
//! |-----------------|----------------------------|-------------|--------------|
//! | Project name    | letters, digits, `. _ -`   | insensitive | letter/digit |
//! | Repository slug | letters, digits, `_`       | lower only  | letter/digit |
//!
//! Separators may repeat inside a name (`my--project` is fine); they may not
//! lead or trail. Older template revisions rejected `.` in project names and
//! had no slug check at all; only the grammars below are live.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

static PROJECT_NAME_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap());

static REPO_SLUG_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9_]*[a-z0-9])?$").unwrap());

/// Check `text` against `grammar`, reporting failures under `label`.
///
/// The grammar must match the whole string; callers pass anchored patterns.
/// Empty text is always rejected, whatever the grammar would say.
pub fn validate_text(text: &str, grammar: &Regex, label: &str) -> Result<(), DomainError> {
    if text.is_empty() || !grammar.is_match(text) {
        return Err(DomainError::InvalidIdentifier {
            value: text.to_string(),
            label: label.to_string(),
        });
    }
    Ok(())
}

// ── IdentifierKind ───────────────────────────────────────────────────────────

/// Which grammar an identifier is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    /// Human-facing display name, e.g. `My.Project`.
    ProjectName,
    /// Repository / package slug, e.g. `my_project`.
    RepoSlug,
}

impl IdentifierKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectName => "project-name",
            Self::RepoSlug => "repo-slug",
        }
    }

    /// Label used in validation error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ProjectName => "project name",
            Self::RepoSlug => "repository name",
        }
    }

    pub fn grammar(&self) -> &'static Regex {
        match self {
            Self::ProjectName => &PROJECT_NAME_GRAMMAR,
            Self::RepoSlug => &REPO_SLUG_GRAMMAR,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Identifier ───────────────────────────────────────────────────────────────

/// A validated identifier. Constructing one is the validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    value: String,
    kind: IdentifierKind,
}

impl Identifier {
    pub fn parse(raw: impl Into<String>, kind: IdentifierKind) -> Result<Self, DomainError> {
        let value = raw.into();
        validate_text(&value, kind.grammar(), kind.label())?;
        Ok(Self { value, kind })
    }

    pub fn project_name(raw: impl Into<String>) -> Result<Self, DomainError> {
        Self::parse(raw, IdentifierKind::ProjectName)
    }

    pub fn repo_slug(raw: impl Into<String>) -> Result<Self, DomainError> {
        Self::parse(raw, IdentifierKind::RepoSlug)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
