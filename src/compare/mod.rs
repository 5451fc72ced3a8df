//! Directory comparison engine
//!
//! This module contains the pieces that turn two directory paths into a diff
//! tree:
//!
//! - `content`: chunked byte-stream equality and SHA-1 content hashing
//! - `rename`: per-directory-level index linking removed files to added
//!   files with identical content
//! - `builder`: the recursive lockstep walk that classifies every entry

pub mod builder;
pub mod content;
pub mod rename;
