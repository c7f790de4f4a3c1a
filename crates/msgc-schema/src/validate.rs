//! # Runtime Schema Validation
//!
//! Loads a contract schema, verifies it against the draft-07 meta-schema,
//! and evaluates instance documents against it.
//!
//! ## Design
//!
//! The meta-schema check is a hard precondition: a schema that is not
//! itself valid draft-07 aborts the run as an environment error before any
//! instance is loaded. Instance evaluation collects **every** violation
//! (no short-circuiting) and sorts them by location path so report output
//! is reproducible across runs. The schema is compiled once and treated as
//! read-only for the lifetime of the run.

use std::path::{Path, PathBuf};

use jsonschema::{Draft, Validator};
use serde_json::Value;

use msgc_core::{DocumentResult, EnvironmentError, Violation};

/// The schema drafting convention all contract schemas are written in.
/// Fixed configuration; never runtime-detected.
const SCHEMA_DRAFT: Draft = Draft::Draft7;

// ---------------------------------------------------------------------------
// Error mode
// ---------------------------------------------------------------------------

/// How many violations to report per document.
///
/// The gap-inventory pipeline historically reported only the first
/// violation; collecting all of them is the stronger default, and the
/// weaker behavior stays available behind this switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Collect every violation, sorted by location path.
    #[default]
    CollectAll,
    /// Report only the first violation in location order.
    FirstOnly,
}

// ---------------------------------------------------------------------------
// ContractValidator
// ---------------------------------------------------------------------------

/// A compiled contract schema plus the logic to check instances against it.
pub struct ContractValidator {
    schema_path: PathBuf,
    compiled: Validator,
    mode: ErrorMode,
}

impl std::fmt::Debug for ContractValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractValidator")
            .field("schema_path", &self.schema_path)
            .field("mode", &self.mode)
            .finish()
    }
}

impl ContractValidator {
    /// Load, meta-check, and compile the schema at `path`, collecting all
    /// violations per document.
    ///
    /// # Errors
    ///
    /// - [`EnvironmentError::MalformedSchema`] if the file cannot be read
    ///   or is not JSON.
    /// - [`EnvironmentError::SchemaCheckFailed`] if the document is not a
    ///   structurally valid schema under its meta-schema.
    /// - [`EnvironmentError::SchemaCompileFailed`] if the engine rejects it.
    pub fn load(path: &Path) -> Result<Self, EnvironmentError> {
        Self::load_with_mode(path, ErrorMode::default())
    }

    /// Like [`ContractValidator::load`] with an explicit [`ErrorMode`].
    pub fn load_with_mode(path: &Path, mode: ErrorMode) -> Result<Self, EnvironmentError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EnvironmentError::MalformedSchema {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let schema: Value =
            serde_json::from_str(&content).map_err(|e| EnvironmentError::MalformedSchema {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Meta-schema check before compilation: no instance validation may
        // proceed against a schema that is not itself valid.
        jsonschema::meta::validate(&schema).map_err(|e| EnvironmentError::SchemaCheckFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let compiled = jsonschema::options()
            .with_draft(SCHEMA_DRAFT)
            .build(&schema)
            .map_err(|e| EnvironmentError::SchemaCompileFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            schema_path: path.to_path_buf(),
            compiled,
            mode,
        })
    }

    /// Path of the schema this validator was compiled from.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Evaluate one parsed instance against the schema.
    ///
    /// Returns all violations sorted by location path; an empty vector
    /// means the instance is valid. Under [`ErrorMode::FirstOnly`] only
    /// the first violation in that order is kept.
    pub fn validate_value(&self, instance: &Value) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .compiled
            .iter_errors(instance)
            .map(|err| Violation::new(err.instance_path.to_string(), err.to_string()))
            .collect();

        violations.sort_by(|a, b| {
            a.instance_path
                .cmp(&b.instance_path)
                .then_with(|| a.message.cmp(&b.message))
        });

        if self.mode == ErrorMode::FirstOnly {
            violations.truncate(1);
        }
        violations
    }

    /// Load and validate the instance document at `path`.
    ///
    /// A parse failure is a validation failure of *that document*, not an
    /// environment error: the result carries a single synthetic violation
    /// at the document root so the caller proceeds with the remaining
    /// documents.
    pub fn check_document(&self, path: &Path) -> DocumentResult {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return DocumentResult::new(path, vec![Violation::at_root(format!("invalid JSON: {e}"))])
            }
        };

        let instance: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                return DocumentResult::new(path, vec![Violation::at_root(format!("invalid JSON: {e}"))])
            }
        };

        DocumentResult::new(path, self.validate_value(&instance))
    }
}
