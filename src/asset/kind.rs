//! Asset classification tags.

use serde::{Deserialize, Serialize};

/// Applicability of a static asset.
///
/// Assets default to `All`. When two assets resolve to the same relative
/// path, the pair is split into one `Build` and one `Publish` asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// Applies at development and publish time (sole claimant of its path).
    All,
    /// Development/build-time variant of a path claimed by two assets.
    Build,
    /// Publish-time variant of a path claimed by two assets.
    Publish,
}

impl AssetKind {
    /// Tag literal, as it appears in manifests and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Build => "Build",
            Self::Publish => "Publish",
        }
    }

    /// Whether the asset participates in development builds.
    pub fn is_for_build(self) -> bool {
        matches!(self, Self::All | Self::Build)
    }

    /// Whether the asset participates in published output.
    pub fn is_for_publish(self) -> bool {
        matches!(self, Self::All | Self::Publish)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset mode tag. Discovery only ever produces standalone assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssetMode {
    #[default]
    All,
}

impl std::fmt::Display for AssetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("All")
    }
}

/// Origin tag. Distinguishes discovered assets from assets injected by
/// other producers (computed, packaged, ...), which have their own pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceKind {
    #[default]
    Discovered,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Discovered")
    }
}
