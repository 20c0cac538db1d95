//! Build-time discovery and classification of static web assets.
//!
//! Turns an ordered list of candidate files into a deduplicated asset
//! catalog: each candidate is matched against include patterns, normalized
//! into a record keyed by its output-relative path, and same-path
//! collisions are resolved into build-only / publish-only pairs (or
//! rejected as configuration defects).
//!
//! # Example
//!
//! ```
//! use webasset::{Candidate, DiscoveryOptions, GlobMatcher, discover_assets};
//!
//! let candidates = vec![
//!     Candidate::new("service-worker.development.js")
//!         .with_target_path("service-worker.js")
//!         .with_copy_to_publish("Never"),
//!     Candidate::new("service-worker.js"),
//! ];
//! let matcher = GlobMatcher::single("**")?;
//! let options = DiscoveryOptions::new("MyApp", "wwwroot", "/");
//!
//! let assets = discover_assets(&candidates, &matcher, &options).into_result()?;
//! assert_eq!(assets.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod asset;
pub mod config;
pub mod core;
pub mod discover;
pub mod logger;
pub mod manifest;
pub mod matcher;
pub mod scan;

pub use asset::{AssetKind, AssetMode, AssetRecord, Candidate, CopyOption, SourceKind};
pub use config::DiscoveryConfig;
pub use crate::core::AssetPath;
pub use discover::{
    DiscoveryDiagnostics, DiscoveryError, DiscoveryOptions, DiscoveryReport, discover_assets,
};
pub use matcher::{GlobMatcher, MatchError, PatternMatcher};
pub use scan::scan_candidates;
