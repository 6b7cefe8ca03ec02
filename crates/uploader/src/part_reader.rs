use std::io::Read;
use std::path::Path;

use coldvault_protocol::ByteRange;
use coldvault_treehash::{Digest, chunk_digests, tree_hash};

use crate::error::UploadError;

/// A Part-Size window of the archive, ready for upload.
#[derive(Debug, Clone)]
pub struct Part {
    /// Byte range the window occupies within the archive.
    pub range: ByteRange,
    /// Raw window bytes.
    pub data: Vec<u8>,
    /// Tree hash over the window's own 1 MiB chunks.
    pub tree_hash: Digest,
}

/// Reads an archive file in Part-Size windows with per-part tree hashes.
///
/// The cursor is forward-only and the file handle is exclusively owned
/// for the duration of a session; for every part returned, the range,
/// the bytes, and the tree hash describe exactly the same window.
#[derive(Debug)]
pub struct PartReader {
    file: std::fs::File,
    part_size: u64,
    position: u64,
    archive_len: u64,
}

impl PartReader {
    /// Opens `path` for part-wise reading.
    ///
    /// A missing or unreadable file is a configuration error, surfaced
    /// before any backend call is made.
    pub fn new(path: &Path, part_size: u64) -> Result<Self, UploadError> {
        let file = std::fs::File::open(path).map_err(|e| {
            UploadError::Config(format!("cannot open archive {}: {e}", path.display()))
        })?;
        let archive_len = file.metadata()?.len();
        Ok(Self {
            file,
            part_size,
            position: 0,
            archive_len,
        })
    }

    /// Reads the next part. Returns `None` once the archive is exhausted.
    ///
    /// The cursor advances by the number of bytes actually read, so a
    /// short final read yields a correspondingly short last part.
    pub fn next_part(&mut self) -> Result<Option<Part>, UploadError> {
        let remaining = self.archive_len - self.position;
        if remaining == 0 {
            return Ok(None);
        }

        let read_size = std::cmp::min(remaining, self.part_size) as usize;
        let mut buf = vec![0u8; read_size];
        let n = self.file.read(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n);

        let range = ByteRange::new(self.position, self.position + n as u64);
        let digests = chunk_digests(&buf);
        let tree = tree_hash(&digests)?;
        self.position += n as u64;

        Ok(Some(Part {
            range,
            data: buf,
            tree_hash: tree,
        }))
    }

    /// Current byte offset.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total archive length in bytes.
    pub fn archive_len(&self) -> u64 {
        self.archive_len
    }

    /// Bytes remaining to read.
    pub fn remaining(&self) -> u64 {
        self.archive_len - self.position
    }
}
