//! Discovery error types and the run-level diagnostics accumulator.

use std::fmt;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use crate::asset::AssetKind;
use crate::core::AssetPath;
use crate::matcher::MatchError;

// ============================================================================
// DiscoveryError
// ============================================================================

/// A single discovery failure. Every variant is a run configuration defect;
/// none is retryable.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Two assets target the same relative path and neither (or both) of
    /// them is excluded from publish output, so there is no way to tell the
    /// build-time variant from the publish-time one.
    #[error(
        "two assets found targeting the same path with incompatible asset kinds:\n\
         '{existing}' with kind '{existing_kind}'\n\
         '{incoming}' with kind '{incoming_kind}'\n\
         for path '{path}'"
    )]
    IncompatibleAssetKinds {
        existing: PathBuf,
        existing_kind: AssetKind,
        incoming: PathBuf,
        incoming_kind: AssetKind,
        path: AssetPath,
    },

    /// A third asset targets a path already resolved into a
    /// `Build`/`Publish` pair.
    #[error(
        "more than two assets are targeting the same path:\n\
         '{first}' with kind '{first_kind}'\n\
         '{second}' with kind '{second_kind}'\n\
         for path '{path}'"
    )]
    OvercrowdedPath {
        first: PathBuf,
        first_kind: AssetKind,
        second: PathBuf,
        second_kind: AssetKind,
        path: AssetPath,
    },

    /// Pattern compilation or ambiguous-match failure.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Invalid run configuration (empty source id, no include patterns).
    #[error("invalid discovery configuration: {0}")]
    Config(String),
}

// ============================================================================
// DiscoveryDiagnostics
// ============================================================================

/// Accumulated errors for one discovery run.
///
/// The run-level contract is report-don't-throw: callers check
/// [`has_errors`](Self::has_errors) (or use
/// [`into_result`](Self::into_result)) instead of catching anything.
#[derive(Debug, Default)]
pub struct DiscoveryDiagnostics {
    errors: Vec<DiscoveryError>,
}

impl DiscoveryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, error: DiscoveryError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[DiscoveryError] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for DiscoveryDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "asset discovery failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{} {err}", "→".red())?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for DiscoveryDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_incompatible_kinds_message() {
        let err = DiscoveryError::IncompatibleAssetKinds {
            existing: PathBuf::from("service-worker.js"),
            existing_kind: AssetKind::All,
            incoming: PathBuf::from("service-worker.development.js"),
            incoming_kind: AssetKind::All,
            path: AssetPath::normalize("service-worker.js"),
        };
        let message = err.to_string();
        assert!(message.contains("incompatible asset kinds"));
        assert!(message.contains("'service-worker.js' with kind 'All'"));
        assert!(message.contains("'service-worker.development.js' with kind 'All'"));
        assert!(message.contains("for path 'service-worker.js'"));
    }

    #[test]
    fn test_overcrowded_message_names_both_priors() {
        let err = DiscoveryError::OvercrowdedPath {
            first: PathBuf::from("a.js"),
            first_kind: AssetKind::Publish,
            second: PathBuf::from("b.js"),
            second_kind: AssetKind::Build,
            path: AssetPath::normalize("app.js"),
        };
        let message = err.to_string();
        assert!(message.contains("more than two assets"));
        assert!(message.contains("'a.js' with kind 'Publish'"));
        assert!(message.contains("'b.js' with kind 'Build'"));
        assert!(message.contains("for path 'app.js'"));
    }

    #[test]
    fn test_into_result() {
        let empty = DiscoveryDiagnostics::new();
        assert!(empty.into_result().is_ok());

        let mut failed = DiscoveryDiagnostics::new();
        failed.error(DiscoveryError::Config("source id is empty".into()));
        let err = failed.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_errors());
    }

    #[test]
    fn test_display_lists_all_errors() {
        let mut diagnostics = DiscoveryDiagnostics::new();
        diagnostics.error(DiscoveryError::Config("source id is empty".into()));
        diagnostics.error(DiscoveryError::Config("no include patterns".into()));

        let rendered = format!("{diagnostics}");
        assert!(rendered.contains("source id is empty"));
        assert!(rendered.contains("no include patterns"));
    }
}
