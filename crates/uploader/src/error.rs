//! Upload error types.

use coldvault_protocol::ByteRange;

/// Errors produced during an archive upload.
///
/// No variant is retried internally: configuration errors are raised
/// before any backend call, checksum rejections need investigation
/// before a resend makes sense, and retry policy for transient backend
/// failures belongs to the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend rejected checksum for part {range} of upload {upload_id}")]
    ChecksumMismatch { upload_id: String, range: ByteRange },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("tree hash error: {0}")]
    TreeHash(#[from] coldvault_treehash::TreeHashError),
}
