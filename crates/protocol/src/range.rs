use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` within an archive.
///
/// Ranges produced by an upload partition the archive: consecutive
/// parts share a boundary, with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Renders the service's Content-Range form, e.g. `bytes 0-1048575/*`.
    ///
    /// The wire form uses an *inclusive* end offset; callers never send
    /// empty ranges.
    pub fn content_range(&self) -> String {
        format!("bytes {}-{}/*", self.start, self.end - 1)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
