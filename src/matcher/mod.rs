//! Include-pattern matching with stem capture.
//!
//! The classifier only depends on the [`PatternMatcher`] capability, so the
//! collision-resolution core can be exercised against a stub engine. The
//! shipped engine is [`GlobMatcher`], built on `glob` patterns.

use glob::{MatchOptions, Pattern};
use thiserror::Error;

use crate::core::AssetPath;

/// Matching options for include patterns: `*` and `?` stay within one path
/// segment, `**` crosses directories.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

// ============================================================================
// Errors
// ============================================================================

/// Pattern-matching failures. Both variants are run configuration defects,
/// not per-candidate conditions.
#[derive(Debug, Error)]
pub enum MatchError {
    /// An include pattern failed to compile.
    #[error("invalid include pattern `{0}`")]
    Pattern(String, #[source] glob::PatternError),

    /// A match key satisfied more than one include pattern, so the captured
    /// stem is ambiguous.
    #[error("'{key}' matched {count} include patterns; a candidate must match exactly one")]
    MultipleMatches { key: String, count: usize },
}

// ============================================================================
// Capability Interface
// ============================================================================

/// Capability interface for evaluating match keys against the run's include
/// patterns.
///
/// Implementations receive the raw match key (either separator style) and
/// return the captured stem: the portion of the key below the pattern's
/// literal directory prefix, which becomes the asset's relative path.
pub trait PatternMatcher {
    /// Evaluate one match key.
    ///
    /// `Ok(None)` means the key is not covered by the patterns (silent
    /// exclusion); `Err` means the match itself is ill-defined and the run
    /// must fail.
    fn match_key(&self, key: &str) -> Result<Option<String>, MatchError>;
}

// ============================================================================
// Glob Engine
// ============================================================================

/// One compiled include pattern plus its stem-capture metadata.
#[derive(Debug)]
struct Include {
    pattern: Pattern,
    /// Number of leading literal (wildcard-free) directory segments. The
    /// captured stem is the match key with that many segments stripped.
    literal_segments: usize,
}

/// Glob-based [`PatternMatcher`] over one or more include patterns.
#[derive(Debug)]
pub struct GlobMatcher {
    includes: Vec<Include>,
}

impl GlobMatcher {
    /// Compile a set of include patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut includes = Vec::new();
        for raw in patterns {
            let raw = raw.as_ref();
            let pattern = Pattern::new(raw)
                .map_err(|err| MatchError::Pattern(raw.to_string(), err))?;
            includes.push(Include {
                pattern,
                literal_segments: literal_prefix_segments(raw),
            });
        }
        Ok(Self { includes })
    }

    /// Compile a single include pattern.
    pub fn single(pattern: &str) -> Result<Self, MatchError> {
        Self::new([pattern])
    }
}

impl PatternMatcher for GlobMatcher {
    fn match_key(&self, key: &str) -> Result<Option<String>, MatchError> {
        let normalized = AssetPath::normalize(key);
        let key = normalized.as_str();

        let matches: Vec<&Include> = self
            .includes
            .iter()
            .filter(|include| include.pattern.matches_with(key, GLOB_OPTIONS))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [include] => Ok(Some(capture_stem(key, include.literal_segments))),
            _ => Err(MatchError::MultipleMatches {
                key: key.to_string(),
                count: matches.len(),
            }),
        }
    }
}

/// Count the leading wildcard-free directory segments of a pattern.
///
/// The final segment is never part of the prefix: a fully literal pattern
/// like `wwwroot/favicon.ico` captures `favicon.ico` as its stem.
fn literal_prefix_segments(pattern: &str) -> usize {
    let segments: Vec<&str> = pattern.split('/').collect();
    let literal = segments
        .iter()
        .take_while(|segment| !segment.contains(['*', '?', '[']))
        .count();
    literal.min(segments.len().saturating_sub(1))
}

/// Strip `skip` leading segments from a normalized key.
fn capture_stem(key: &str, skip: usize) -> String {
    if skip == 0 {
        return key.to_string();
    }
    match key.splitn(skip + 1, '/').last() {
        Some(stem) => stem.to_string(),
        None => key.to_string(),
    }
}
