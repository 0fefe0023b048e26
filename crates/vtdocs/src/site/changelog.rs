//! Release notes.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Semantic size of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    /// Breaking changes.
    Major,
    /// New features.
    Minor,
    /// Fixes only.
    Patch,
}

/// Kind of a single change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// New functionality.
    Added,
    /// Better existing functionality.
    Improved,
    /// Bug fix.
    Fixed,
    /// Incompatible change.
    Breaking,
    /// Scheduled for removal.
    Deprecated,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Added => "Added",
            Self::Improved => "Improved",
            Self::Fixed => "Fixed",
            Self::Breaking => "Breaking",
            Self::Deprecated => "Deprecated",
        })
    }
}

/// One entry of a release.
#[derive(Debug, Clone, Serialize)]
pub struct Change {
    /// Kind of change.
    pub kind: ChangeKind,
    /// Short title.
    pub title: String,
    /// What changed.
    pub description: String,
    /// Extra detail.
    pub details: Option<String>,
    /// Affected endpoint paths.
    pub endpoints: Vec<String>,
}

impl Change {
    /// Create a change without details or endpoints.
    #[must_use]
    pub fn new(kind: ChangeKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            details: None,
            endpoints: Vec::new(),
        }
    }

    /// Attach detail text.
    #[must_use]
    pub fn details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Attach affected endpoints.
    #[must_use]
    pub fn endpoints(mut self, endpoints: &[&str]) -> Self {
        self.endpoints = endpoints.iter().map(ToString::to_string).collect();
        self
    }
}

/// A dated, versioned release.
#[derive(Debug, Clone, Serialize)]
pub struct Release {
    /// Version string, e.g. `v2.1.0`.
    pub version: String,
    /// Release date.
    pub date: NaiveDate,
    /// Release size.
    pub kind: ReleaseKind,
    /// Changes, most important first.
    pub changes: Vec<Change>,
}

impl Release {
    /// Create a release dated `date` (`YYYY-MM-DD`).
    ///
    /// # Panics
    ///
    /// Panics if `date` is not a valid `YYYY-MM-DD` date.
    #[must_use]
    pub fn new(version: &str, date: &str, kind: ReleaseKind, changes: Vec<Change>) -> Self {
        Self {
            version: version.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Invalid release date"),
            kind,
            changes,
        }
    }

    /// Date in long form, e.g. `December 7, 2023`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Number of changes of `kind`.
    #[must_use]
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Whether the release contains breaking changes.
    #[must_use]
    pub fn is_breaking(&self) -> bool {
        self.count(ChangeKind::Breaking) > 0
    }

    pub(crate) fn text(&self) -> String {
        let mut text = self.version.clone();
        for change in &self.changes {
            text.push(' ');
            text.push_str(&change.title);
            text.push(' ');
            text.push_str(&change.description);
        }
        text
    }
}
