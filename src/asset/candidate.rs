//! Candidate input: a file path plus optional copy/override metadata.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A file put forward for asset discovery, not yet classified.
///
/// Candidates are immutable for the duration of a run. All metadata is
/// optional; empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    /// Candidate file path (opaque to the classifier, used as the match
    /// key of last resort and carried into the record as the source path).
    pub path: PathBuf,
    /// Explicit output path override. Takes priority over everything else
    /// when deriving the match key.
    pub target_path: Option<String>,
    /// Link/alias path. Used as the match key when no target path is set.
    pub link: Option<String>,
    /// Raw copy-on-build directive (resolved with a `Never` default).
    pub copy_to_build: Option<String>,
    /// Raw copy-on-publish directive (resolved with a `PreserveNewest`
    /// default).
    pub copy_to_publish: Option<String>,
}

impl Candidate {
    /// Create a candidate with no metadata.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Builder: set the target-path override.
    pub fn with_target_path(mut self, target_path: impl Into<String>) -> Self {
        self.target_path = Some(target_path.into());
        self
    }

    /// Builder: set the link/alias path.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Builder: set the raw copy-on-build directive.
    pub fn with_copy_to_build(mut self, raw: impl Into<String>) -> Self {
        self.copy_to_build = Some(raw.into());
        self
    }

    /// Builder: set the raw copy-on-publish directive.
    pub fn with_copy_to_publish(mut self, raw: impl Into<String>) -> Self {
        self.copy_to_publish = Some(raw.into());
        self
    }

    /// Get the candidate path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derive the key this candidate is matched against.
    ///
    /// Priority: target-path override, then link, then the candidate's own
    /// path. The first non-empty value wins.
    pub fn match_key(&self) -> Cow<'_, str> {
        if let Some(target) = non_empty(self.target_path.as_deref()) {
            return Cow::Borrowed(target);
        }
        if let Some(link) = non_empty(self.link.as_deref()) {
            return Cow::Borrowed(link);
        }
        self.path.to_string_lossy()
    }

    /// Which metadata field supplied the match key, for trace logging.
    pub(crate) fn match_key_origin(&self) -> Option<&'static str> {
        if non_empty(self.target_path.as_deref()).is_some() {
            Some("target path")
        } else if non_empty(self.link.as_deref()).is_some() {
            Some("link")
        } else {
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_key_defaults_to_path() {
        let candidate = Candidate::new("wwwroot/js/app.js");
        assert_eq!(candidate.match_key(), "wwwroot/js/app.js");
        assert_eq!(candidate.match_key_origin(), None);
    }

    #[test]
    fn test_match_key_prefers_target_path() {
        let candidate = Candidate::new("service-worker.development.js")
            .with_target_path("wwwroot/service-worker.js")
            .with_link("ignored.js");
        assert_eq!(candidate.match_key(), "wwwroot/service-worker.js");
        assert_eq!(candidate.match_key_origin(), Some("target path"));
    }

    #[test]
    fn test_match_key_falls_back_to_link() {
        let candidate = Candidate::new("../shared/logo.png").with_link("img/logo.png");
        assert_eq!(candidate.match_key(), "img/logo.png");
        assert_eq!(candidate.match_key_origin(), Some("link"));
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let candidate = Candidate::new("a.css").with_target_path("").with_link("");
        assert_eq!(candidate.match_key(), "a.css");
        assert_eq!(candidate.match_key_origin(), None);
    }
}
