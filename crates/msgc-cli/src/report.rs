//! # Run Reporting
//!
//! Renders a completed [`RunSummary`]. Success markers and the
//! full-success summary go to stdout; the consolidated failure section
//! goes to stderr. Documents appear in validation order (lexicographic
//! path order within each pipeline), so output is identical across runs.

use std::path::Path;

use serde_json::json;

use msgc_core::{outcome::display_path, RunSummary};

/// Print the human-readable report for a completed run.
///
/// One `✓` line per valid document (path shown relative to the repository
/// root), then either the total count on full success or a consolidated
/// failure section: one `✗` header per failing document followed by one
/// indented `location: message` line per violation.
pub fn print_human(summary: &RunSummary, repo_root: &Path) {
    for result in summary.results() {
        if result.is_valid() {
            println!("✓ {}", display_path(&result.path, repo_root).display());
        }
    }

    if summary.is_all_valid() {
        println!("\nAll {} documents are valid.", summary.total());
        return;
    }

    eprintln!("\nValidation failures:");
    for result in summary.failures() {
        eprintln!("✗ {}", result.path.display());
        for violation in &result.violations {
            eprintln!("  - {violation}");
        }
    }
}

/// The run summary as a JSON document, for machine consumption.
///
/// Additive alternative to the text report; the exit-code contract is
/// unchanged.
pub fn json_report(summary: &RunSummary) -> serde_json::Value {
    json!({
        "total": summary.total(),
        "failed": summary.failed(),
        "results": summary.results(),
    })
}
