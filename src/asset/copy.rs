//! Copy directives controlling output materialization.

use serde::{Deserialize, Serialize};

/// How an asset is copied into a build or publish output directory.
///
/// Raw candidate metadata is resolved with [`CopyOption::resolve`], which
/// falls back to a per-field default for anything it does not recognize.
/// Lenient on purpose: unknown directives from newer tooling must not fail
/// the run, only path collisions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyOption {
    /// Do not materialize the file.
    Never,
    /// Copy when the source is newer than the target.
    PreserveNewest,
    /// Copy unconditionally.
    Always,
}

impl CopyOption {
    /// Default for the copy-on-build directive.
    pub const BUILD_DEFAULT: Self = Self::Never;

    /// Default for the copy-on-publish directive.
    pub const PUBLISH_DEFAULT: Self = Self::PreserveNewest;

    /// Resolve a raw directive string, falling back to `default`.
    ///
    /// Only the exact literals `Never`, `PreserveNewest` and `Always` are
    /// recognized (case-sensitive). Absent, empty or unrecognized values
    /// resolve to the default.
    pub fn resolve(raw: Option<&str>, default: Self) -> Self {
        match raw {
            Some("Never") => Self::Never,
            Some("PreserveNewest") => Self::PreserveNewest,
            Some("Always") => Self::Always,
            _ => default,
        }
    }

    /// Directive literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::PreserveNewest => "PreserveNewest",
            Self::Always => "Always",
        }
    }
}

impl std::fmt::Display for CopyOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
