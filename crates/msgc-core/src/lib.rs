//! # msgc-core — Contract Validation Data Model
//!
//! Shared types for the messaging-service contract validation toolchain:
//! the two-class error taxonomy, per-document validation results, and the
//! run-level aggregation that determines the process exit status.
//!
//! ## Error classes
//!
//! Environment errors and validation failures are distinct types, never
//! conflated, because they map to different exit codes:
//!
//! - [`EnvironmentError`] (exit 2) — missing files, unparsable schemas,
//!   schemas that fail their own meta-schema check, empty instance sets.
//!   These abort a run before any validation is attempted.
//! - Validation failures (exit 1) are *data*, not errors: each document
//!   produces a [`DocumentResult`], and a single bad document never
//!   prevents the remaining documents from being checked.

pub mod error;
pub mod outcome;

pub use error::{
    EnvironmentError, EXIT_ENVIRONMENT_ERROR, EXIT_OK, EXIT_VALIDATION_FAILURE,
};
pub use outcome::{DocumentResult, RunSummary, Violation, ROOT_LOCATION};
