//! Diff output tree
//!
//! The builder returns one [`DirNode`] per compared directory level, holding
//! only the entries that differ. Directories and files live in separate
//! namespaces, matching the filesystem guarantee that a name cannot be both.
//! Nodes form a strict ownership tree built bottom-up; after pruning they
//! are read-only input to the renderer.

use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

/// Classification of a differing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Removed,
    Added,
    Changed,
    Renamed,
}

impl DiffKind {
    /// Style a rendered label with this kind's display color.
    ///
    /// Kept separate from classification so the builder never touches
    /// presentation concerns.
    pub fn paint(&self, label: &str) -> ColoredString {
        match self {
            DiffKind::Removed => label.bright_red(),
            DiffKind::Added => label.bright_green(),
            DiffKind::Changed | DiffKind::Renamed => label.bright_yellow(),
        }
    }
}

/// One differing file.
///
/// `renamed_from` is `Some` exactly when the kind is [`DiffKind::Renamed`];
/// the constructors are the only way to build an entry, so the pairing
/// cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    kind: DiffKind,
    renamed_from: Option<String>,
}

impl FileEntry {
    pub fn removed() -> Self {
        Self {
            kind: DiffKind::Removed,
            renamed_from: None,
        }
    }

    pub fn added() -> Self {
        Self {
            kind: DiffKind::Added,
            renamed_from: None,
        }
    }

    pub fn changed() -> Self {
        Self {
            kind: DiffKind::Changed,
            renamed_from: None,
        }
    }

    pub fn renamed(old_name: String) -> Self {
        debug_assert!(!old_name.is_empty());
        Self {
            kind: DiffKind::Renamed,
            renamed_from: Some(old_name),
        }
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    pub fn renamed_from(&self) -> Option<&str> {
        self.renamed_from.as_deref()
    }
}

/// A child of a [`DirNode`], as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub enum Child<'t> {
    Dir(&'t DirNode),
    File(&'t FileEntry),
}

/// One directory level of the diff output.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: BTreeMap<String, FileEntry>,
}

impl DirNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: String, entry: FileEntry) {
        self.files.insert(name, entry);
    }

    /// Drop a previously recorded file entry, used when a Removed entry is
    /// superseded by a rename match.
    pub fn remove_file(&mut self, name: &str) -> Option<FileEntry> {
        self.files.remove(name)
    }

    pub fn add_dir(&mut self, name: String, node: DirNode) {
        self.dirs.insert(name, node);
    }

    pub fn file(&self, name: &str) -> Option<&FileEntry> {
        self.files.get(name)
    }

    pub fn dir(&self, name: &str) -> Option<&DirNode> {
        self.dirs.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// All children merged into one list, sorted by name (case-sensitive).
    pub fn children(&self) -> Vec<(&str, Child<'_>)> {
        let mut entries = self
            .dirs
            .iter()
            .map(|(name, node)| (name.as_str(), Child::Dir(node)))
            .chain(
                self.files
                    .iter()
                    .map(|(name, entry)| (name.as_str(), Child::File(entry))),
            )
            .collect::<Vec<_>>();

        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Post-order removal of subtrees that contain no differences.
    ///
    /// Children are pruned before the keep-or-drop decision, so a directory
    /// whose subdirectories all empty out is itself dropped. File entries
    /// are never touched: every surviving node has at least one descendant
    /// file entry.
    pub fn prune(&mut self) {
        self.dirs.retain(|_, child| {
            child.prune();
            !child.is_empty()
        });
    }
}
