use std::io::Read;
use std::path::Path;

use sha2::{Digest as _, Sha256};

use crate::{Digest, TREE_HASH_CHUNK_SIZE, TreeHashError};

/// Computes the digest sequence of an in-memory byte source.
///
/// One SHA-256 digest per consecutive 1 MiB chunk, in source order.
/// An empty source yields an empty sequence.
pub fn chunk_digests(data: &[u8]) -> Vec<Digest> {
    data.chunks(TREE_HASH_CHUNK_SIZE)
        .map(|chunk| {
            let mut hasher = Sha256::new();
            hasher.update(chunk);
            Digest::new(hasher.finalize().into())
        })
        .collect()
}

/// Computes the digest sequence of a file without loading it whole.
pub fn chunk_digests_file(path: &Path) -> Result<Vec<Digest>, TreeHashError> {
    let mut file = std::fs::File::open(path)?;
    let mut digester = ChunkDigester::new();
    let mut buf = vec![0u8; TREE_HASH_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        digester.update(&buf[..n]);
    }
    Ok(digester.finish())
}

/// Incremental chunk digester.
///
/// Accepts byte slices of any size and tracks the 1 MiB chunk boundaries
/// internally, so callers may feed data in windows that do not line up
/// with the chunk granularity, such as upload-part sized reads.
/// Feeding the same bytes in any windowing produces the same sequence as
/// [`chunk_digests`] over the concatenation.
#[derive(Default)]
pub struct ChunkDigester {
    hasher: Sha256,
    filled: usize,
    digests: Vec<Digest>,
}

impl ChunkDigester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the digester.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = std::cmp::min(TREE_HASH_CHUNK_SIZE - self.filled, data.len());
            self.hasher.update(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled == TREE_HASH_CHUNK_SIZE {
                let full = std::mem::take(&mut self.hasher);
                self.digests.push(Digest::new(full.finalize().into()));
                self.filled = 0;
            }
        }
    }

    /// Closes the final partial chunk (if any) and returns the sequence.
    pub fn finish(mut self) -> Vec<Digest> {
        if self.filled > 0 {
            self.digests.push(Digest::new(self.hasher.finalize().into()));
        }
        self.digests
    }

    /// Number of completed chunks so far (excludes a partial tail).
    pub fn chunk_count(&self) -> usize {
        self.digests.len()
    }
}
