//! Structural diff between two directory trees.
//!
//! Walks an old and a new directory in lockstep and reports every entry that
//! was removed, added, changed, or renamed, recursing into subdirectories
//! present on both sides. Rename detection is exact-content only: a removed
//! regular file and an added regular file with the same SHA-1 digest at the
//! same directory level are reported as a single rename.
//!
//! - `compare`: file comparison, content hashing, and the diff tree builder
//! - `tree`: the diff output tree and post-order pruning
//! - `render`: box-drawing terminal rendering of the pruned tree

pub mod compare;
pub mod render;
pub mod tree;
