//! End-to-end tests for the validate subcommand: full contract trees on
//! disk, driven through the public `run_validate`/`run_pipeline` API.

use std::path::{Path, PathBuf};

use msgc_cli::validate::{run_pipeline, run_validate, ValidateArgs};
use msgc_schema::{ContractLocator, ErrorMode};

const ENVELOPE_SCHEMA: &str = r##"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "title": "Domain Event Envelope",
    "type": "object",
    "required": ["event_id", "event_type", "occurred_at", "payload"],
    "additionalProperties": false,
    "properties": {
        "event_id": {"type": "string", "minLength": 1},
        "event_type": {"type": "string", "pattern": "^[a-z_]+\\.(created|updated|deleted)$"},
        "occurred_at": {"type": "string"},
        "payload": {"type": "object"}
    }
}"##;

const GAP_SCHEMA: &str = r##"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "title": "Gap Inventory",
    "type": "object",
    "required": ["updated", "gaps"],
    "properties": {
        "updated": {"type": "string"},
        "gaps": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["id", "area", "status", "summary"],
                "properties": {
                    "id": {"type": "string", "pattern": "^GAP-[0-9]{3}$"},
                    "area": {"type": "string"},
                    "status": {"enum": ["open", "in-progress", "closed"]},
                    "summary": {"type": "string"}
                }
            }
        }
    }
}"##;

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A contract tree whose documents are all valid.
fn valid_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        &root.join("contracts/events/envelope.schema.json"),
        ENVELOPE_SCHEMA,
    );
    write(
        &root.join("contracts/events/examples/message.created.example.json"),
        r#"{
            "event_id": "b7f4d6e2-0c3a-4f79-9a1e-5d2c8b4a6e10",
            "event_type": "message.created",
            "occurred_at": "2025-11-04T16:12:09Z",
            "payload": {"conversation_id": "conv-1", "body": "hello"}
        }"#,
    );
    write(
        &root.join("contracts/events/examples/conversation.created.example.json"),
        r#"{
            "event_id": "0e9a1c52-7b44-4f0a-8d36-2f61c0de9b77",
            "event_type": "conversation.created",
            "occurred_at": "2025-11-04T16:11:58Z",
            "payload": {"conversation_id": "conv-1"}
        }"#,
    );
    write(&root.join("contracts/gap-inventory.schema.json"), GAP_SCHEMA);
    write(
        &root.join("gap-inventory.json"),
        r#"{
            "updated": "2025-11-04",
            "gaps": [
                {"id": "GAP-001", "area": "webhooks", "status": "open", "summary": "retry backoff not ported"},
                {"id": "GAP-002", "area": "metrics", "status": "closed", "summary": "queue depth gauge"}
            ]
        }"#,
    );
    dir
}

#[test]
fn full_tree_with_valid_documents_exits_zero() {
    let dir = valid_tree();
    let code = run_validate(&ValidateArgs::default(), dir.path()).unwrap();
    assert_eq!(code, 0);
}

#[test]
fn wrong_event_type_verb_is_reported_at_its_location() {
    // Envelope event_type must end in .created/.updated/.deleted.
    let dir = valid_tree();
    write(
        &dir.path()
            .join("contracts/events/examples/message.archived.example.json"),
        r#"{
            "event_id": "5d3c7a91-44f2-4b6e-9c08-1ab2de34f560",
            "event_type": "message.archived",
            "occurred_at": "2025-11-04T16:20:00Z",
            "payload": {}
        }"#,
    );

    let locator = ContractLocator::envelope_examples(dir.path());
    let summary = run_pipeline(&locator, ErrorMode::CollectAll).unwrap();
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed(), 1);

    let failing: Vec<_> = summary.failures().collect();
    assert!(failing[0].path.ends_with("message.archived.example.json"));
    assert_eq!(failing[0].violations[0].location(), "event_type");

    let code = run_validate(&ValidateArgs::default(), dir.path()).unwrap();
    assert_eq!(code, 1);
}

#[test]
fn one_valid_one_invalid_document_both_reported() {
    let dir = valid_tree();
    write(
        &dir.path().join("contracts/events/examples/extra.example.json"),
        r#"{"event_id": "x", "event_type": "message.created", "occurred_at": "t", "payload": {}, "rogue": true}"#,
    );

    let locator = ContractLocator::envelope_examples(dir.path());
    let summary = run_pipeline(&locator, ErrorMode::CollectAll).unwrap();
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn missing_schema_file_is_an_environment_error_naming_the_path() {
    let dir = valid_tree();
    std::fs::remove_file(dir.path().join("contracts/events/envelope.schema.json")).unwrap();

    let locator = ContractLocator::envelope_examples(dir.path());
    let err = run_pipeline(&locator, ErrorMode::CollectAll).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("envelope.schema.json"), "message was: {msg}");

    let code = run_validate(&ValidateArgs::default(), dir.path()).unwrap();
    assert_eq!(code, 2);
}

#[test]
fn gap_inventory_violations_point_into_the_array() {
    let dir = valid_tree();
    write(
        &dir.path().join("gap-inventory.json"),
        r#"{
            "updated": "2025-11-04",
            "gaps": [
                {"id": "GAP-001", "area": "webhooks", "status": "open", "summary": "ok"},
                {"id": "gap-2", "area": "metrics", "status": "wontfix", "summary": "bad"}
            ]
        }"#,
    );

    let locator = ContractLocator::gap_inventory(dir.path());
    let summary = run_pipeline(&locator, ErrorMode::CollectAll).unwrap();
    let failing: Vec<_> = summary.failures().collect();
    assert_eq!(failing.len(), 1);

    let locations: Vec<_> = failing[0]
        .violations
        .iter()
        .map(|v| v.location().to_string())
        .collect();
    assert_eq!(locations, vec!["gaps/1/id", "gaps/1/status"]);
}

#[test]
fn validates_the_shipped_contract_fixtures() {
    // The repository ships a real contracts/ tree; validate it when
    // running from a full checkout.
    let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.pop(); // crates
    root.pop(); // repo root
    if !root.join("contracts").is_dir() {
        return;
    }

    let code = run_validate(&ValidateArgs::default(), &root).unwrap();
    assert_eq!(code, 0);
}
