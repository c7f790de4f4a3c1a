//! # Environment Error Taxonomy
//!
//! Environment-class errors for the contract validation toolchain, built
//! with `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every variant carries the offending path so that the single diagnostic
//! line printed before an exit-2 abort identifies what was missing or
//! malformed without guesswork.

use thiserror::Error;

/// Exit status when every instance document passed validation.
pub const EXIT_OK: u8 = 0;

/// Exit status when at least one instance document failed validation.
pub const EXIT_VALIDATION_FAILURE: u8 = 1;

/// Exit status for environment errors: missing schema or instance files,
/// a schema that is unparsable or fails its meta-schema check, or an
/// empty instance set.
pub const EXIT_ENVIRONMENT_ERROR: u8 = 2;

/// Conditions that abort a run before any instance validation is attempted.
///
/// Validation failures are deliberately absent from this enum: an instance
/// document that violates its schema (or cannot even be parsed) is reported
/// through [`crate::DocumentResult`] so the run completes and every
/// remaining document is still checked.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// The schema file does not exist at its fixed location.
    #[error("schema not found: {path}")]
    SchemaNotFound {
        /// Resolved path where the schema was expected.
        path: String,
    },

    /// The fixed instance file or instance directory does not exist.
    #[error("instance location not found: {path}")]
    InstancesNotFound {
        /// Resolved path of the missing file or directory.
        path: String,
    },

    /// The instance directory exists but matched no documents.
    #[error("no instance documents found in {dir} (expected *{suffix})")]
    NoInstancesFound {
        /// Directory that was scanned.
        dir: String,
        /// Filename suffix the scan was matching.
        suffix: String,
    },

    /// The schema file could not be read or is not parseable JSON.
    #[error("schema invalid or unreadable: {path}: {reason}")]
    MalformedSchema {
        /// Path of the schema file.
        path: String,
        /// Why reading or parsing failed.
        reason: String,
    },

    /// The schema parsed as JSON but failed its own meta-schema check.
    #[error("schema failed meta-schema check: {path}: {reason}")]
    SchemaCheckFailed {
        /// Path of the schema file.
        path: String,
        /// The meta-schema violation.
        reason: String,
    },

    /// The schema passed the meta-schema check but the validation engine
    /// could not compile it.
    #[error("failed to compile schema {path}: {reason}")]
    SchemaCompileFailed {
        /// Path of the schema file.
        path: String,
        /// The engine's rejection reason.
        reason: String,
    },

    /// I/O error while scanning an instance directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
