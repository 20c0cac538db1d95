//! Normalized asset path type for type-safe collision keys.
//!
//! - Internal representation: always `/`-separated, root-relative
//! - Input boundary: accepts either separator style, leading separators,
//!   and redundant `.`/empty segments

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Normalized relative path (collision key).
///
/// Invariants:
/// - Separator is always `/` (never `\`)
/// - No leading or trailing separator
/// - No empty or `.` segments
///
/// Normalization is idempotent: normalizing an already-normalized path
/// returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(Arc<str>);

impl AssetPath {
    /// Normalize a raw path string into canonical relative form.
    ///
    /// `wwwroot\js\app.js`, `/wwwroot/js/app.js` and `wwwroot/./js//app.js`
    /// all normalize to `wwwroot/js/app.js`.
    pub fn normalize(raw: &str) -> Self {
        let unified = raw.trim().replace('\\', "/");

        let normalized = unified
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");

        Self(Arc::from(normalized))
    }

    /// Get the normalized path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the path is empty (e.g. a normalized root base path).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of path segments.
    pub fn segments(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split('/').count()
        }
    }

    /// Final path segment (file name), if any.
    pub fn file_name(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            self.0.rsplit('/').next()
        }
    }
}

impl std::fmt::Display for AssetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for AssetPath {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AssetPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetPath {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for AssetPath {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl PartialEq<str> for AssetPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for AssetPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for AssetPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AssetPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::normalize(&s))
    }
}
