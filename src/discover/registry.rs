//! Run-scoped path registry: collision detection and kind resolution.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::asset::{AssetKind, AssetRecord, CopyOption};
use crate::core::AssetPath;

use super::diagnostics::DiscoveryError;

/// Indexes into the record arena claiming one relative path. Valid states
/// hold 0, 1 or 2 entries; a third claim is rejected.
type Claims = SmallVec<[usize; 2]>;

/// Registry of classified records, keyed by canonical relative path.
///
/// Records live in an arena in input order; the index maps each relative
/// path to the arena positions claiming it. Keeping the records owned and
/// indexable lets a collision revise the earlier sibling's kind without
/// shared mutable aliasing.
#[derive(Default)]
pub(crate) struct PathRegistry {
    records: Vec<AssetRecord>,
    claims: FxHashMap<AssetPath, Claims>,
}

impl PathRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a record and resolve any collision on its relative path.
    ///
    /// Two assets may share a relative path only when exactly one of them
    /// is excluded from publish output (`copy_on_publish == Never`): that
    /// one becomes the `Build` variant and its sibling the `Publish`
    /// variant. This supports the common pairing of a development file and
    /// a production file for the same logical asset. Any other multiplicity
    /// is a configuration defect.
    pub(crate) fn insert(&mut self, record: AssetRecord) -> Result<(), DiscoveryError> {
        let index = self.records.len();
        let path = record.relative_path.clone();
        self.records.push(record);

        let claims = self.claims.entry(path).or_default();
        match (claims.first().copied(), claims.get(1).copied()) {
            (None, _) => {
                claims.push(index);
                Ok(())
            }
            (Some(existing), None) => {
                let incoming_never =
                    self.records[index].copy_on_publish == CopyOption::Never;
                let existing_never =
                    self.records[existing].copy_on_publish == CopyOption::Never;

                match (incoming_never, existing_never) {
                    (true, true) | (false, false) => {
                        Err(DiscoveryError::IncompatibleAssetKinds {
                            existing: self.records[existing].source.clone(),
                            existing_kind: self.records[existing].kind,
                            incoming: self.records[index].source.clone(),
                            incoming_kind: self.records[index].kind,
                            path: self.records[index].relative_path.clone(),
                        })
                    }
                    (true, false) => {
                        self.records[index].kind = AssetKind::Build;
                        self.records[existing].kind = AssetKind::Publish;
                        claims.push(index);
                        Ok(())
                    }
                    (false, true) => {
                        self.records[index].kind = AssetKind::Publish;
                        self.records[existing].kind = AssetKind::Build;
                        claims.push(index);
                        Ok(())
                    }
                }
            }
            (Some(first), Some(second)) => Err(DiscoveryError::OvercrowdedPath {
                first: self.records[first].source.clone(),
                first_kind: self.records[first].kind,
                second: self.records[second].source.clone(),
                second_kind: self.records[second].kind,
                path: self.records[index].relative_path.clone(),
            }),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Consume the registry, yielding records in input order.
    pub(crate) fn into_records(self) -> Vec<AssetRecord> {
        self.records
    }
}
