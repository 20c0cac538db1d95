//! Asset record: the classified output unit of a discovery run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::AssetPath;

use super::{AssetKind, AssetMode, Candidate, CopyOption, SourceKind};

/// A classified static web asset.
///
/// `relative_path` is the canonical output-relative path and the collision
/// key: at most two records may share it, and then only as a
/// `Build`/`Publish` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Origin file path, carried through from the candidate.
    pub source: PathBuf,
    /// Origin tag (always `Discovered` for records built here).
    pub source_kind: SourceKind,
    /// Opaque producer tag copied verbatim from run configuration.
    pub source_id: String,
    /// Content root directory, carried through unchanged.
    pub content_root: PathBuf,
    /// Normalized base path from run configuration.
    pub base_path: AssetPath,
    /// Canonical output-relative path (collision key).
    pub relative_path: AssetPath,
    /// Applicability; starts as `All`, revised at most once when a sibling
    /// claims the same relative path.
    pub kind: AssetKind,
    /// Asset mode tag (always `All`).
    pub mode: AssetMode,
    /// Resolved copy-on-build directive.
    pub copy_on_build: CopyOption,
    /// Resolved copy-on-publish directive.
    pub copy_on_publish: CopyOption,
}

impl AssetRecord {
    /// Build a discovered record from an accepted candidate.
    ///
    /// The copy directives are resolved here, with their per-field
    /// defaults; `kind` starts as `All` and is only revised by the path
    /// registry when a collision is split.
    pub fn discovered(
        candidate: &Candidate,
        source_id: &str,
        content_root: &Path,
        base_path: AssetPath,
        relative_path: AssetPath,
    ) -> Self {
        Self {
            source: candidate.path.clone(),
            source_kind: SourceKind::Discovered,
            source_id: source_id.to_string(),
            content_root: content_root.to_path_buf(),
            base_path,
            relative_path,
            kind: AssetKind::All,
            mode: AssetMode::All,
            copy_on_build: CopyOption::resolve(
                candidate.copy_to_build.as_deref(),
                CopyOption::BUILD_DEFAULT,
            ),
            copy_on_publish: CopyOption::resolve(
                candidate.copy_to_publish.as_deref(),
                CopyOption::PUBLISH_DEFAULT,
            ),
        }
    }
}
