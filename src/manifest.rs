//! Manifest persistence for the build-orchestration boundary.
//!
//! A discovery run hands its record list back to the orchestrator as a JSON
//! manifest. Nothing here interprets the records; this is serialization
//! only.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::asset::AssetRecord;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "webassets.manifest.json";

/// Write the classified records to a JSON manifest.
pub fn write_manifest(records: &[AssetRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .context("failed to serialize asset manifest")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write asset manifest `{}`", path.display()))
}

/// Read a previously written manifest back into records.
pub fn read_manifest(path: &Path) -> Result<Vec<AssetRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read asset manifest `{}`", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse asset manifest `{}`", path.display()))
}
