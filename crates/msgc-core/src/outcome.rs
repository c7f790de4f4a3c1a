//! # Validation Outcomes
//!
//! Per-document results and run-level aggregation. A [`Violation`] pins a
//! schema non-conformance to a location inside the instance document; a
//! [`DocumentResult`] pairs one document with its (possibly empty) violation
//! list; a [`RunSummary`] aggregates every document checked in one run and
//! maps the aggregate to a process exit status.
//!
//! All types serialize with serde so the CLI can emit a machine-readable
//! report alongside the human-readable one.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{EXIT_OK, EXIT_VALIDATION_FAILURE};

/// Sentinel rendered for a violation located at the document root.
pub const ROOT_LOCATION: &str = "<root>";

/// One detected non-conformance between an instance document and its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer to the violating node; the empty string is the root.
    pub instance_path: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl Violation {
    /// Violation at the given JSON Pointer location.
    pub fn new(instance_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            instance_path: instance_path.into(),
            message: message.into(),
        }
    }

    /// Synthetic violation at the document root, used when an instance
    /// document cannot be parsed at all.
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new("", message)
    }

    /// The location path rendered for humans: slash-joined keys/indices,
    /// with the document root as [`ROOT_LOCATION`].
    pub fn location(&self) -> &str {
        let trimmed = self.instance_path.trim_start_matches('/');
        if trimmed.is_empty() {
            ROOT_LOCATION
        } else {
            trimmed
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Pairs one instance document with its validation outcome.
///
/// An empty violation list means the document is valid. Violations are
/// stored sorted by location path; the order is part of the contract so
/// that report output is reproducible across runs.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    /// Source location of the instance document.
    pub path: PathBuf,
    /// All detected violations, sorted by location path.
    pub violations: Vec<Violation>,
}

impl DocumentResult {
    /// Result for the document at `path` with the given violations.
    pub fn new(path: impl Into<PathBuf>, violations: Vec<Violation>) -> Self {
        Self {
            path: path.into(),
            violations,
        }
    }

    /// Result for a document with zero violations.
    pub fn valid(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Vec::new())
    }

    /// True when the document has zero violations.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregate outcome of one validation run.
///
/// Documents appear in the order they were validated, which is the
/// lexicographic path order produced by the locator.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    results: Vec<DocumentResult>,
}

impl RunSummary {
    /// An empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document's result.
    pub fn push(&mut self, result: DocumentResult) {
        self.results.push(result);
    }

    /// Merge another summary into this one, preserving order.
    pub fn extend(&mut self, other: RunSummary) {
        self.results.extend(other.results);
    }

    /// Every document result, in validation order.
    pub fn results(&self) -> &[DocumentResult] {
        &self.results
    }

    /// Total number of documents processed.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of documents with at least one violation.
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_valid()).count()
    }

    /// True when every document passed.
    pub fn is_all_valid(&self) -> bool {
        self.failed() == 0
    }

    /// The failing documents, in validation order.
    pub fn failures(&self) -> impl Iterator<Item = &DocumentResult> {
        self.results.iter().filter(|r| !r.is_valid())
    }

    /// Exit status for this summary: 0 when all documents passed, 1 when
    /// any failed. Environment errors never reach a summary; they map to
    /// exit 2 at the CLI boundary.
    pub fn exit_code(&self) -> u8 {
        if self.is_all_valid() {
            EXIT_OK
        } else {
            EXIT_VALIDATION_FAILURE
        }
    }
}

/// Render a path relative to a base directory when possible.
///
/// Success markers show repository-relative paths; documents outside the
/// repository root fall back to their full path.
pub fn display_path<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
