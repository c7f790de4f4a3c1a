//! # Contract File Location
//!
//! Resolves the fixed on-disk layout of the contract documents. The layout
//! is configuration, not a CLI surface: each pipeline knows the relative
//! location of its schema and instance documents under the repository
//! root, which is established once at process start and threaded through
//! explicitly. There is no global state here.

use std::path::{Path, PathBuf};

use msgc_core::EnvironmentError;

/// Relative path of the event envelope schema.
const ENVELOPE_SCHEMA: &str = "contracts/events/envelope.schema.json";

/// Directory scanned for example event payloads.
const ENVELOPE_EXAMPLES_DIR: &str = "contracts/events/examples";

/// Filename suffix that marks a file as an example payload.
const EXAMPLE_SUFFIX: &str = ".example.json";

/// Relative path of the gap inventory schema.
const GAP_INVENTORY_SCHEMA: &str = "contracts/gap-inventory.schema.json";

/// Relative path of the gap inventory document itself.
const GAP_INVENTORY_DOC: &str = "gap-inventory.json";

/// Where a pipeline's instance documents come from.
#[derive(Debug, Clone)]
enum InstanceSource {
    /// A single fixed document.
    File(PathBuf),
    /// Every file in a fixed directory whose name ends with `suffix`.
    Dir { dir: PathBuf, suffix: &'static str },
}

/// Resolves schema and instance paths for one validation pipeline.
#[derive(Debug, Clone)]
pub struct ContractLocator {
    name: &'static str,
    base: PathBuf,
    schema: PathBuf,
    instances: InstanceSource,
}

impl ContractLocator {
    /// Locator for the envelope examples pipeline: every `*.example.json`
    /// under `contracts/events/examples/`, validated against the shared
    /// envelope schema.
    pub fn envelope_examples(base: impl Into<PathBuf>) -> Self {
        Self {
            name: "envelope-examples",
            base: base.into(),
            schema: PathBuf::from(ENVELOPE_SCHEMA),
            instances: InstanceSource::Dir {
                dir: PathBuf::from(ENVELOPE_EXAMPLES_DIR),
                suffix: EXAMPLE_SUFFIX,
            },
        }
    }

    /// Locator for the gap inventory pipeline: the single
    /// `gap-inventory.json` document and its schema.
    pub fn gap_inventory(base: impl Into<PathBuf>) -> Self {
        Self {
            name: "gap-inventory",
            base: base.into(),
            schema: PathBuf::from(GAP_INVENTORY_SCHEMA),
            instances: InstanceSource::File(PathBuf::from(GAP_INVENTORY_DOC)),
        }
    }

    /// Short pipeline name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The repository root this locator resolves against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute path to the schema file.
    ///
    /// # Errors
    ///
    /// [`EnvironmentError::SchemaNotFound`] if no file exists at the fixed
    /// location.
    pub fn schema_path(&self) -> Result<PathBuf, EnvironmentError> {
        let path = self.base.join(&self.schema);
        if !path.is_file() {
            return Err(EnvironmentError::SchemaNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(path)
    }

    /// Paths of all instance documents, in lexicographic order.
    ///
    /// # Errors
    ///
    /// [`EnvironmentError::InstancesNotFound`] if the fixed file or
    /// directory is absent, [`EnvironmentError::NoInstancesFound`] if the
    /// directory exists but matched no documents.
    pub fn instance_paths(&self) -> Result<Vec<PathBuf>, EnvironmentError> {
        match &self.instances {
            InstanceSource::File(rel) => {
                let path = self.base.join(rel);
                if !path.is_file() {
                    return Err(EnvironmentError::InstancesNotFound {
                        path: path.display().to_string(),
                    });
                }
                Ok(vec![path])
            }
            InstanceSource::Dir { dir, suffix } => {
                let dir = self.base.join(dir);
                if !dir.is_dir() {
                    return Err(EnvironmentError::InstancesNotFound {
                        path: dir.display().to_string(),
                    });
                }

                let mut paths = Vec::new();
                for entry in std::fs::read_dir(&dir)? {
                    let entry = entry?;
                    let path = entry.path();
                    let matches = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(suffix));
                    if path.is_file() && matches {
                        paths.push(path);
                    }
                }
                paths.sort();

                if paths.is_empty() {
                    return Err(EnvironmentError::NoInstancesFound {
                        dir: dir.display().to_string(),
                        suffix: (*suffix).to_string(),
                    });
                }
                Ok(paths)
            }
        }
    }
}
