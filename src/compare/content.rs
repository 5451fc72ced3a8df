//! Chunked file comparison and content hashing
//!
//! Both operations stream the file in fixed 8 KiB chunks so arbitrarily
//! large files are handled without loading them into memory. The SHA-1
//! fingerprint produced by [`hash_file`] is the shared contract with the
//! duplicate-file finder, which indexes one tree by the same digest.

use anyhow::Result;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Files are read in increments of 8 KiB when comparing or hashing.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// SHA-1 digest over a file's entire byte stream.
///
/// Acts as a content-identity fingerprint: two regular files with the same
/// `ContentHash` are treated as having identical content when matching
/// removed files against added files for rename detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 20]);

impl ContentHash {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

/// Compare two files byte by byte, returning `true` only when both streams
/// are exhausted simultaneously with every chunk equal.
///
/// A short chunk on one side while the other still has data counts as a
/// mismatch, so files of different length never compare equal. I/O failures
/// on either side propagate; both handles are closed on every exit path.
pub fn contents_equal(path_a: &Path, path_b: &Path) -> Result<bool> {
    let mut file_a = File::open(path_a)?;
    let mut file_b = File::open(path_b)?;

    let mut chunk_a = [0u8; CHUNK_SIZE];
    let mut chunk_b = [0u8; CHUNK_SIZE];

    loop {
        let len_a = fill_chunk(&mut file_a, &mut chunk_a)?;
        let len_b = fill_chunk(&mut file_b, &mut chunk_b)?;

        if chunk_a[..len_a] != chunk_b[..len_b] {
            return Ok(false);
        }

        if len_a == 0 {
            return Ok(true);
        }
    }
}

/// Stream a file through SHA-1 and return the final digest.
pub fn hash_file(path: &Path) -> Result<ContentHash> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(ContentHash(hasher.finalize().into()))
}

// Read until the chunk is full or the stream ends, so a partial read from
// the OS is never mistaken for end-of-file.
fn fill_chunk(reader: &mut impl Read, chunk: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < chunk.len() {
        let read = reader.read(&mut chunk[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }

    Ok(filled)
}
