//! Single-pass classification of candidates into asset records.

use std::path::PathBuf;

use crate::asset::{AssetRecord, Candidate};
use crate::core::AssetPath;
use crate::debug;
use crate::matcher::PatternMatcher;

use super::diagnostics::DiscoveryDiagnostics;
use super::registry::PathRegistry;

// ============================================================================
// Run Configuration
// ============================================================================

/// Run-level configuration copied into every produced record.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Opaque producer tag, copied verbatim.
    pub source_id: String,
    /// Content root directory, carried through unchanged.
    pub content_root: PathBuf,
    /// Base path; normalized once per run.
    pub base_path: String,
}

impl DiscoveryOptions {
    pub fn new(
        source_id: impl Into<String>,
        content_root: impl Into<PathBuf>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            content_root: content_root.into(),
            base_path: base_path.into(),
        }
    }
}

// ============================================================================
// Run Report
// ============================================================================

/// Outcome of one discovery run.
///
/// A failed run produces no usable asset list: the records are only
/// reachable through [`assets`](Self::assets) / [`into_result`](Self::into_result),
/// both of which withhold them when any error was recorded.
#[derive(Debug)]
pub struct DiscoveryReport {
    assets: Vec<AssetRecord>,
    diagnostics: DiscoveryDiagnostics,
}

impl DiscoveryReport {
    /// Whether the run completed without errors.
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Classified records in input order, or `None` for a failed run.
    pub fn assets(&self) -> Option<&[AssetRecord]> {
        if self.succeeded() {
            Some(&self.assets)
        } else {
            None
        }
    }

    /// Errors recorded by the run (empty on success).
    pub fn diagnostics(&self) -> &DiscoveryDiagnostics {
        &self.diagnostics
    }

    /// Convert to Result: the record list on success, the accumulated
    /// diagnostics otherwise.
    pub fn into_result(self) -> Result<Vec<AssetRecord>, DiscoveryDiagnostics> {
        if self.diagnostics.has_errors() {
            Err(self.diagnostics)
        } else {
            Ok(self.assets)
        }
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Classify candidates into a deduplicated asset catalog.
///
/// Candidates are processed strictly in input order. Each one is matched
/// against the run's include patterns via its match key; non-matching
/// candidates are skipped without error. Matching candidates become records
/// whose relative path is the captured stem, normalized, and are fed into
/// the path registry for collision resolution. The first error aborts the
/// run (fail-fast); already-accepted records stay in the report but are
/// withheld from callers.
pub fn discover_assets(
    candidates: &[Candidate],
    matcher: &dyn PatternMatcher,
    options: &DiscoveryOptions,
) -> DiscoveryReport {
    let mut diagnostics = DiscoveryDiagnostics::new();
    let mut registry = PathRegistry::new();
    let base_path = AssetPath::normalize(&options.base_path);

    for candidate in candidates {
        let key = candidate.match_key();
        if let Some(origin) = candidate.match_key_origin() {
            debug!("discover"; "using {} '{}' for candidate '{}'",
                origin, key, candidate.path().display());
        }

        let stem = match matcher.match_key(&key) {
            Ok(Some(stem)) => stem,
            Ok(None) => {
                debug!("discover"; "rejected candidate '{}'", key);
                continue;
            }
            Err(err) => {
                diagnostics.error(err.into());
                break;
            }
        };

        let relative_path = AssetPath::normalize(&stem);
        debug!("discover"; "accepted candidate '{}' with relative path '{}'", key, relative_path);

        let record = AssetRecord::discovered(
            candidate,
            &options.source_id,
            &options.content_root,
            base_path.clone(),
            relative_path,
        );

        if let Err(err) = registry.insert(record) {
            diagnostics.error(err);
            break;
        }
    }

    if diagnostics.is_empty() {
        debug!("discover"; "classified {} assets", registry.len());
    }

    DiscoveryReport {
        assets: registry.into_records(),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetKind, CopyOption};
    use crate::matcher::{GlobMatcher, MatchError};

    fn options() -> DiscoveryOptions {
        DiscoveryOptions::new("TestApp", "wwwroot", "/")
    }

    fn match_all() -> GlobMatcher {
        GlobMatcher::single("**").unwrap()
    }

    #[test]
    fn test_service_worker_pair() {
        let candidates = vec![
            Candidate::new("service-worker.development.js")
                .with_target_path("service-worker.js")
                .with_copy_to_publish("Never"),
            Candidate::new("service-worker.js").with_target_path("service-worker.js"),
        ];

        let report = discover_assets(&candidates, &match_all(), &options());
        assert!(report.succeeded());

        let assets = report.assets().unwrap();
        assert_eq!(assets.len(), 2);
        assert!(assets.iter().all(|a| a.relative_path == "service-worker.js"));
        assert_eq!(assets[0].kind, AssetKind::Build);
        assert_eq!(assets[0].source.to_string_lossy(), "service-worker.development.js");
        assert_eq!(assets[1].kind, AssetKind::Publish);
    }

    #[test]
    fn test_service_worker_pair_reversed_order() {
        let candidates = vec![
            Candidate::new("service-worker.js").with_target_path("service-worker.js"),
            Candidate::new("service-worker.development.js")
                .with_target_path("service-worker.js")
                .with_copy_to_publish("Never"),
        ];

        let assets = discover_assets(&candidates, &match_all(), &options())
            .into_result()
            .unwrap();
        assert_eq!(assets[0].kind, AssetKind::Publish);
        assert_eq!(assets[1].kind, AssetKind::Build);
    }

    #[test]
    fn test_non_matching_candidates_are_silently_excluded() {
        let matcher = GlobMatcher::single("wwwroot/**").unwrap();
        let candidates = vec![
            Candidate::new("README.md"),
            Candidate::new("wwwroot/css/site.css"),
        ];

        let report = discover_assets(&candidates, &matcher, &options());
        assert!(report.succeeded());

        let assets = report.assets().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].relative_path, "css/site.css");
    }

    #[test]
    fn test_zero_matches_is_a_successful_empty_run() {
        let matcher = GlobMatcher::single("wwwroot/**").unwrap();
        let candidates = vec![Candidate::new("docs/manual.pdf")];

        let report = discover_assets(&candidates, &matcher, &options());
        assert!(report.succeeded());
        assert_eq!(report.assets().unwrap().len(), 0);
    }

    #[test]
    fn test_distinct_paths_stay_kind_all_in_input_order() {
        let candidates = vec![
            Candidate::new("b.css"),
            Candidate::new("a.css"),
            Candidate::new("c.css"),
        ];

        let assets = discover_assets(&candidates, &match_all(), &options())
            .into_result()
            .unwrap();
        assert_eq!(assets.len(), 3);
        assert!(assets.iter().all(|a| a.kind == AssetKind::All));
        // Input order, not sorted order.
        assert_eq!(assets[0].relative_path, "b.css");
        assert_eq!(assets[1].relative_path, "a.css");
        assert_eq!(assets[2].relative_path, "c.css");
    }

    #[test]
    fn test_record_carries_run_configuration() {
        let options = DiscoveryOptions::new("MyLib", "staticwebassets", "_content\\MyLib");
        let candidates = vec![Candidate::new("logo.png")];

        let assets = discover_assets(&candidates, &match_all(), &options)
            .into_result()
            .unwrap();
        assert_eq!(assets[0].source_id, "MyLib");
        assert_eq!(assets[0].content_root.to_string_lossy(), "staticwebassets");
        assert_eq!(assets[0].base_path, "_content/MyLib");
        assert_eq!(assets[0].copy_on_build, CopyOption::Never);
        assert_eq!(assets[0].copy_on_publish, CopyOption::PreserveNewest);
    }

    #[test]
    fn test_ambiguous_pair_fails_run() {
        let candidates = vec![
            Candidate::new("a.js").with_target_path("app.js"),
            Candidate::new("b.js").with_target_path("app.js"),
        ];

        let report = discover_assets(&candidates, &match_all(), &options());
        assert!(!report.succeeded());
        assert!(report.assets().is_none());
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_first_error_aborts_the_run() {
        let candidates = vec![
            Candidate::new("a.js").with_target_path("app.js").with_copy_to_publish("Never"),
            Candidate::new("b.js").with_target_path("app.js").with_copy_to_publish("Never"),
            // Would be accepted on its own, but must never be evaluated.
            Candidate::new("c.css"),
        ];

        let report = discover_assets(&candidates, &match_all(), &options());
        assert_eq!(report.diagnostics().len(), 1);
        assert!(report.assets().is_none());
    }

    #[test]
    fn test_overcrowded_path_fails_naming_priors() {
        let candidates = vec![
            Candidate::new("sw.development.js")
                .with_target_path("sw.js")
                .with_copy_to_publish("Never"),
            Candidate::new("sw.js").with_target_path("sw.js"),
            Candidate::new("sw.extra.js").with_target_path("sw.js"),
        ];

        let diagnostics = discover_assets(&candidates, &match_all(), &options())
            .into_result()
            .unwrap_err();
        let message = diagnostics.to_string();
        assert!(message.contains("more than two assets"));
        assert!(message.contains("sw.development.js"));
        assert!(message.contains("'sw.js'"));
    }

    #[test]
    fn test_ambiguous_match_is_a_run_failure() {
        let matcher = GlobMatcher::new(["**", "js/**"]).unwrap();
        let candidates = vec![Candidate::new("js/app.js")];

        let diagnostics = discover_assets(&candidates, &matcher, &options())
            .into_result()
            .unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.to_string().contains("matched 2 include patterns"));
    }

    #[test]
    fn test_classifier_works_with_a_stub_matcher() {
        /// Accepts only `.js` keys and captures the whole key as the stem.
        struct JsOnly;

        impl PatternMatcher for JsOnly {
            fn match_key(&self, key: &str) -> Result<Option<String>, MatchError> {
                Ok(key.ends_with(".js").then(|| key.to_string()))
            }
        }

        let candidates = vec![Candidate::new("app.js"), Candidate::new("site.css")];
        let assets = discover_assets(&candidates, &JsOnly, &options())
            .into_result()
            .unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].relative_path, "app.js");
    }
}
