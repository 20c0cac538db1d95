//! Core types shared across the crate.

mod path;

pub use path::AssetPath;
