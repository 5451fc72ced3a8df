//! Rename detection index
//!
//! Scoped to a single directory level: the builder records every removed
//! regular file here and later asks whether an added file's content hash
//! matches a still-unclaimed candidate. The index is dropped with the
//! level's stack frame and is never shared across sibling or nested levels.

use crate::compare::content::ContentHash;
use std::collections::HashMap;

/// Maps a content hash to at most one unclaimed removed-file name.
///
/// A hash holds a single candidate slot: recording a second removed file
/// with the same content overwrites the first, and a successful claim
/// consumes the slot so identical content can satisfy at most one rename.
/// Which duplicate wins the slot follows directory enumeration order, which
/// is filesystem-defined and deliberately left unsorted.
#[derive(Debug, Default)]
pub struct RenameMatcher {
    candidates: HashMap<ContentHash, String>,
}

impl RenameMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a removed regular file as a rename candidate.
    pub fn record(&mut self, hash: ContentHash, old_name: String) {
        self.candidates.insert(hash, old_name);
    }

    /// Claim the candidate matching `hash`, removing it from the index.
    pub fn claim(&mut self, hash: &ContentHash) -> Option<String> {
        self.candidates.remove(hash)
    }
}
