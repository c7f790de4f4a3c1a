//! # Validate Subcommand
//!
//! Runs the envelope-examples and gap-inventory pipelines: locate the
//! contract files, load and meta-check the schema, validate every instance
//! document, and report.
//!
//! Each pipeline moves strictly forward: paths, then the checked schema,
//! then per-document results, then the report and exit status. Any failure
//! to locate files or to load the schema aborts the run with a single
//! diagnostic line on stderr and exit status 2, before any instance is
//! loaded.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use msgc_core::{EnvironmentError, RunSummary, EXIT_ENVIRONMENT_ERROR};
use msgc_schema::{ContractLocator, ContractValidator, ErrorMode};

use crate::report;

/// Arguments for the `msgc validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Validate the example event payloads against the envelope schema.
    #[arg(long)]
    pub envelope_examples: bool,

    /// Validate the gap inventory document against its schema.
    #[arg(long)]
    pub gap_inventory: bool,

    /// Report only the first violation per document instead of all of them.
    #[arg(long)]
    pub first_error_only: bool,

    /// Emit the run summary as JSON on stdout instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
///
/// With no selection flags both pipelines run. Returns the process exit
/// status: 0 when every document passed, 1 on validation failures, 2 on
/// environment errors.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path) -> Result<u8> {
    let run_all = !args.envelope_examples && !args.gap_inventory;
    let mode = if args.first_error_only {
        ErrorMode::FirstOnly
    } else {
        ErrorMode::CollectAll
    };

    let mut locators = Vec::new();
    if run_all || args.envelope_examples {
        locators.push(ContractLocator::envelope_examples(repo_root));
    }
    if run_all || args.gap_inventory {
        locators.push(ContractLocator::gap_inventory(repo_root));
    }

    let mut summary = RunSummary::new();
    for locator in &locators {
        match run_pipeline(locator, mode) {
            Ok(results) => summary.extend(results),
            Err(e) => {
                // Environment errors abort before any per-document report.
                eprintln!("{e}");
                return Ok(EXIT_ENVIRONMENT_ERROR);
            }
        }
    }

    if args.json {
        println!("{}", report::json_report(&summary));
    } else {
        report::print_human(&summary, repo_root);
    }

    Ok(summary.exit_code())
}

/// Run one pipeline end to end: resolve paths, load and meta-check the
/// schema, validate every instance document in lexicographic path order.
///
/// # Errors
///
/// Any [`EnvironmentError`]: missing schema, schema failing its own check,
/// missing instance location, or an empty instance set.
pub fn run_pipeline(
    locator: &ContractLocator,
    mode: ErrorMode,
) -> Result<RunSummary, EnvironmentError> {
    let schema_path = locator.schema_path()?;
    let validator = ContractValidator::load_with_mode(&schema_path, mode)?;
    let instances = locator.instance_paths()?;

    tracing::info!(
        contract = locator.name(),
        schema = %schema_path.display(),
        instances = instances.len(),
        "validating instance documents"
    );

    let mut summary = RunSummary::new();
    for path in &instances {
        summary.push(validator.check_document(path));
    }
    Ok(summary)
}
