//! # msgc-schema — Contract Validation Engine
//!
//! Locates the messaging-service contract documents on disk and validates
//! JSON instances against their draft-07 JSON Schemas.
//!
//! ## Responsibilities
//!
//! - **Location:** resolve the fixed relative layout of each contract
//!   (schema file plus instance documents) under an explicitly passed
//!   repository root ([`ContractLocator`]).
//! - **Schema loading:** parse a schema file, verify it against the
//!   draft-07 meta-schema, and compile it ([`ContractValidator`]). A schema
//!   that fails its own check never validates any instance.
//! - **Instance validation:** evaluate each document independently,
//!   collecting every violation sorted by location path. Constraint
//!   evaluation is delegated to the `jsonschema` crate; this crate owns
//!   only orchestration, aggregation, and ordering.
//!
//! ## Design
//!
//! Each document's validation is a pure function of (schema, instance):
//! no cross-document state, no caching of partial results. An instance
//! that cannot be parsed is reported as a validation failure of that
//! document, not an environment error, so one bad file never aborts the
//! rest of the run.

pub mod locate;
pub mod validate;

pub use locate::ContractLocator;
pub use validate::{ContractValidator, ErrorMode};
