// src/batch/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::batch::model::BatchFile;
use crate::batch::validate::validate_batch;
use crate::dag::MissingDepPolicy;

/// Load a batch file from a given path and return the raw `BatchFile`.
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation (unique titles, cycles, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<BatchFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading batch file at {:?}", path))?;

    let batch: BatchFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML batch from {:?}", path))?;

    Ok(batch)
}

/// Load a batch file from path and run semantic validation.
///
/// This is the entry point the CLI uses:
///
/// - Reads TOML.
/// - Checks for:
///   - an empty batch,
///   - empty or duplicate titles,
///   - self-dependencies,
///   - unknown dependency references (under [`MissingDepPolicy::Strict`]),
///   - dependency cycles.
///
/// The scheduler re-detects cycles on its own; the check here exists to
/// fail fast with a friendly diagnostic before any ordering work.
pub fn load_and_validate(
    path: impl AsRef<Path>,
    missing_deps: MissingDepPolicy,
) -> Result<BatchFile> {
    let batch = load_from_path(&path)?;
    validate_batch(&batch, missing_deps)?;
    Ok(batch)
}
