//! Recursive diff tree construction
//!
//! Walks the old and new directories in lockstep: the new side's entry names
//! are loaded into a working set, the old side is enumerated against it, and
//! whatever remains unconsumed afterwards is an addition. This classifies
//! every entry in a single pass per level without a second listing.

use crate::compare::content::{contents_equal, hash_file};
use crate::compare::rename::RenameMatcher;
use crate::tree::{DirNode, FileEntry};
use anyhow::Context;
use derive_new::new;
use std::collections::HashSet;
use std::path::Path;

/// Builds a [`DirNode`] tree describing every difference between an old and
/// a new directory.
///
/// Both roots must exist and be readable directories; any filesystem error
/// during the walk aborts the whole comparison. The resulting tree is not
/// pruned, callers run [`DirNode::prune`] before rendering.
#[derive(Debug, new)]
pub struct DiffTreeBuilder<'p> {
    old_root: &'p Path,
    new_root: &'p Path,
}

impl DiffTreeBuilder<'_> {
    pub fn build(&self) -> anyhow::Result<DirNode> {
        self.diff_level(self.old_root, self.new_root)
    }

    /// Compare one directory level, recursing into same-name subdirectories.
    ///
    /// Entry types are inspected with `symlink_metadata`, so symlinks are
    /// classified by the link itself rather than its target. Anything that
    /// is neither a directory nor a regular file pairs conservatively as
    /// Changed. Rename candidates are scoped to this level only.
    fn diff_level(&self, old_dir: &Path, new_dir: &Path) -> anyhow::Result<DirNode> {
        let mut node = DirNode::new();
        let mut unconsumed = list_names(new_dir)?;
        let mut matcher = RenameMatcher::new();

        for entry in std::fs::read_dir(old_dir)
            .with_context(|| format!("Failed to read directory {old_dir:?}"))?
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let old_path = entry.path();
            let old_meta = std::fs::symlink_metadata(&old_path)?;

            if !unconsumed.remove(&name) {
                // Present only in the old tree. Regular files become rename
                // candidates for this level before being recorded as removed.
                if old_meta.is_file() {
                    matcher.record(hash_file(&old_path)?, name.clone());
                }
                node.add_file(name, FileEntry::removed());
                continue;
            }

            let new_path = new_dir.join(&name);
            let new_meta = std::fs::symlink_metadata(&new_path)?;

            if old_meta.file_type() != new_meta.file_type() {
                // The entry is not of the same type on both sides.
                node.add_file(name, FileEntry::changed());
            } else if old_meta.is_dir() {
                let child = self.diff_level(&old_path, &new_path)?;
                if !child.is_empty() {
                    node.add_dir(name, child);
                }
            } else if !old_meta.is_file() {
                // Symlinks and special files pair as changed.
                node.add_file(name, FileEntry::changed());
            } else if old_meta.len() != new_meta.len() {
                node.add_file(name, FileEntry::changed());
            } else if !contents_equal(&old_path, &new_path)? {
                node.add_file(name, FileEntry::changed());
            }
        }

        // Whatever the old side did not consume is new. A regular file whose
        // content matches an unclaimed rename candidate supersedes that
        // candidate's Removed entry; everything else is an addition.
        for name in unconsumed {
            let new_path = new_dir.join(&name);

            if std::fs::symlink_metadata(&new_path)?.is_file()
                && let Some(old_name) = matcher.claim(&hash_file(&new_path)?)
            {
                node.remove_file(&old_name);
                node.add_file(name, FileEntry::renamed(old_name));
                continue;
            }

            node.add_file(name, FileEntry::added());
        }

        Ok(node)
    }
}

fn list_names(dir: &Path) -> anyhow::Result<HashSet<String>> {
    std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {dir:?}"))?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect()
}
