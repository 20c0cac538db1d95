//! Asset data model: candidates in, classified records out.

mod candidate;
mod copy;
mod kind;
mod record;

pub use candidate::Candidate;
pub use copy::CopyOption;
pub use kind::{AssetKind, AssetMode, SourceKind};
pub use record::AssetRecord;
