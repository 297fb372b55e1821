//! Predicate definition files
//!
//! Predicates are declared in YAML (or JSON) files and deserialized into
//! [`FileSystemWhereSpecification`] values. Loading performs no
//! validation: callers run `validate` on everything they loaded and
//! inspect the accumulated notification before matching begins.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::predicates::FileSystemWhereSpecification;

/// Load a predicate definition from a YAML or JSON file
///
/// The format is chosen by file extension: `.json` parses as JSON,
/// everything else as YAML.
pub fn load_from_file(path: &Path) -> Result<FileSystemWhereSpecification> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read predicate file: {}", path.display()))?;

    debug!("Loading predicate definition from {}", path.display());

    let spec = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse predicate file: {}", path.display()))?
    } else {
        serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse predicate file: {}", path.display()))?
    };

    Ok(spec)
}

/// Save a predicate definition to a YAML or JSON file
pub fn save_to_file(spec: &FileSystemWhereSpecification, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(spec).context("Failed to serialize predicate definition")?
    } else {
        serde_yml::to_string(spec).context("Failed to serialize predicate definition")?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write predicate file: {}", path.display()))?;

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
