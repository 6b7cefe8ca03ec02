//! Wire types for the cold-storage vault multipart upload API.
//!
//! Typed request/response payloads for the three operations the vault
//! service exposes (initiate, upload part, complete) plus the byte
//! range form the service uses to address parts. The request/response
//! shapes are owned by the service; this crate pins them so callers and
//! test doubles agree on the wire.

pub mod messages;
pub mod range;

// Re-export primary types for convenience.
pub use messages::{
    CompleteUploadRequest, CompleteUploadResponse, InitiateUploadRequest, InitiateUploadResponse,
    UploadPartRequest, UploadPartResponse,
};
pub use range::ByteRange;
