//! Findings, finding collection, and the reduced issue model.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Issue field holding the delimited list of committer usernames.
pub const FIELD_COMMITTERS: &str = "GitHub Users to Authorize as Committers";
/// Issue field holding the URL of the repository to host.
pub const FIELD_REPOSITORY_URL: &str = "Repository URL";
/// Issue field holding the requested name for the hosted repository.
pub const FIELD_NEW_REPOSITORY_NAME: &str = "New Repository Name";

/// Severity of a finding, in ascending order of importance.
///
/// `Required` findings block approval of the hosting request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational note, no action required.
    Info,
    /// Should be addressed but does not block hosting.
    Warning,
    /// Must be fixed before the request can be approved.
    Required,
}

impl Severity {
    /// Wiki-markup color for the severity label.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "black",
            Severity::Warning => "orange",
            // Anything that is not Info or Warning renders as blocking.
            _ => "red",
        }
    }

    /// Display label for the severity.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            _ => "Required",
        }
    }
}

/// One reported issue or informational note about a hosting request.
///
/// The message is rendered at construction time and never mutated. Two
/// findings are the same finding when severity and message match; subitems
/// are not part of identity, so independent verifiers can raise the same
/// complaint without producing duplicate report lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// How serious the finding is.
    pub severity: Severity,
    /// Rendered report text.
    pub message: String,
    /// Explanatory sub-points, rendered nested under this finding.
    pub subitems: Vec<Finding>,
}

impl Finding {
    /// Creates a finding with no subitems.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            subitems: Vec::new(),
        }
    }

    /// Creates an informational finding.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a blocking finding.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(Severity::Required, message)
    }

    /// Attaches explanatory sub-points.
    pub fn with_subitems(mut self, subitems: Vec<Finding>) -> Self {
        self.subitems = subitems;
        self
    }
}

impl PartialEq for Finding {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity && self.message == other.message
    }
}

impl Eq for Finding {}

impl Hash for Finding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.severity.hash(state);
        self.message.hash(state);
    }
}

/// Deduplicating accumulator for the findings of one check run.
///
/// Insertion order is preserved, which keeps rendering deterministic for
/// findings of equal severity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindingSet {
    items: Vec<Finding>,
}

impl FindingSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finding unless an equal one is already present.
    ///
    /// Returns whether the finding was actually added.
    pub fn insert(&mut self, finding: Finding) -> bool {
        if self.items.contains(&finding) {
            return false;
        }
        self.items.push(finding);
        true
    }

    /// Inserts every finding in order.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.insert(finding);
        }
    }

    /// True when no verifier reported anything.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct findings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates the findings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.items.iter()
    }
}

/// A hosting-request issue, reduced to its named string fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. `HOSTING-1234`.
    pub key: String,
    /// Field display name to string value.
    pub fields: BTreeMap<String, String>,
}

impl Issue {
    /// Field value by display name; missing fields read as empty.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}
