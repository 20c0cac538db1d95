//! Candidate collection from a content root.
//!
//! This is the filesystem-facing front of discovery: it walks a directory
//! tree and returns candidates whose paths are content-root-relative, in a
//! deterministic (sorted) order. Classification itself never touches the
//! filesystem.

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

use crate::asset::Candidate;
use crate::debug;

/// Collect candidates under a content root.
///
/// Returns files only, sorted by path for deterministic input order. A
/// missing content root yields no candidates
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
/// It does not modify any state
pub fn scan_candidates(content_root: &Path) -> Vec<Candidate> {
    if !content_root.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(content_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .collect();
    files.sort();

    debug!("scan"; "collected {} candidates from '{}'", files.len(), content_root.display());

    files
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(content_root)
                .unwrap_or(path.as_path())
                .to_path_buf();
            Candidate::new(relative)
        })
        .collect()
}
