//! SHA-256 tree hashing over fixed 1 MiB chunks.
//!
//! A byte source is split into consecutive 1 MiB chunks (the last chunk
//! may be shorter) and each chunk is hashed with SHA-256. The resulting
//! digest sequence is reduced pairwise (parent = `SHA256(a || b)` over
//! the raw 64 bytes) level by level until a single root remains. An odd
//! digest at the end of a level is carried into the next level unchanged.
//!
//! The root depends only on the byte content and length of the source,
//! never on how the caller windows its reads, which is what lets a
//! backend recompute and verify it independently.

mod chunks;
mod digest;
mod tree;

pub use chunks::{ChunkDigester, chunk_digests, chunk_digests_file};
pub use digest::Digest;
pub use tree::{tree_hash, tree_hash_of};

/// Chunk granularity for tree hashing: 1 MiB.
pub const TREE_HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// Errors produced while computing tree hashes.
#[derive(Debug, thiserror::Error)]
pub enum TreeHashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty digest sequence has no tree hash")]
    EmptyInput,
}
