//! `[discovery]` run configuration section.
//!
//! # Example
//!
//! ```toml
//! [discovery]
//! source_id = "MyApp"
//! content_root = "wwwroot"
//! base_path = "/"
//! patterns = ["**"]
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::discover::{
    DiscoveryDiagnostics, DiscoveryError, DiscoveryOptions, DiscoveryReport, discover_assets,
};
use crate::matcher::{GlobMatcher, MatchError};
use crate::scan::scan_candidates;

/// Run-level discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Opaque producer tag copied into every record.
    pub source_id: String,
    /// Directory scanned for candidates; carried into records unchanged.
    pub content_root: PathBuf,
    /// Base path prefix for the consuming application.
    pub base_path: String,
    /// Include patterns evaluated against each candidate's match key.
    pub patterns: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            source_id: String::new(),
            content_root: PathBuf::from("wwwroot"),
            base_path: "/".to_string(),
            patterns: vec!["**".to_string()],
        }
    }
}

impl DiscoveryConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Validate the configuration, reporting every problem found.
    pub fn validate(&self, diagnostics: &mut DiscoveryDiagnostics) {
        if self.source_id.is_empty() {
            diagnostics.error(DiscoveryError::Config("source_id must not be empty".into()));
        }
        if self.patterns.is_empty() {
            diagnostics.error(DiscoveryError::Config(
                "at least one include pattern is required".into(),
            ));
        }
        for pattern in &self.patterns {
            if let Err(err) = glob::Pattern::new(pattern) {
                diagnostics.error(MatchError::Pattern(pattern.clone(), err).into());
            }
        }
    }

    /// Compile the configured include patterns.
    pub fn matcher(&self) -> Result<GlobMatcher, MatchError> {
        GlobMatcher::new(&self.patterns)
    }

    /// Run-level options handed to the classifier.
    pub fn options(&self) -> DiscoveryOptions {
        DiscoveryOptions::new(&self.source_id, &self.content_root, &self.base_path)
    }

    /// Scan the content root and classify everything in one call.
    ///
    /// Validation failures are returned as diagnostics, the same way
    /// classification failures are.
    pub fn run(&self) -> Result<DiscoveryReport, DiscoveryDiagnostics> {
        let mut diagnostics = DiscoveryDiagnostics::new();
        self.validate(&mut diagnostics);
        diagnostics.into_result()?;

        let matcher = match self.matcher() {
            Ok(matcher) => matcher,
            Err(err) => {
                let mut diagnostics = DiscoveryDiagnostics::new();
                diagnostics.error(err.into());
                return Err(diagnostics);
            }
        };

        let candidates = scan_candidates(&self.content_root);
        Ok(discover_assets(&candidates, &matcher, &self.options()))
    }
}
