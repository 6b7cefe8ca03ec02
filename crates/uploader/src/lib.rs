//! Multipart archive upload to a cold-storage vault.
//!
//! This crate implements the **upload flow**: the part-size policy, a
//! forward-only part reader, per-part and whole-archive tree-hash
//! checksums, and the coordinator that drives the vault service's three
//! operations. It is a library crate with no transport dependencies —
//! callers provide a [`VaultBackend`] implementation that bridges to
//! the actual storage API.
//!
//! # Pipeline
//!
//! 1. **Initiate** — open an upload session on the vault
//! 2. **Upload parts** — send Part-Size windows, each with its own tree hash
//! 3. **Complete** — submit the whole-archive tree hash and exact byte length
//!
//! The archive file is read exactly once: while parts stream out, a
//! [`coldvault_treehash::ChunkDigester`] accumulates the whole-archive
//! digest sequence at the 1 MiB granularity, independent of the part
//! windows.

pub mod backend;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod part_reader;
pub mod part_size;
pub mod types;

// Re-export primary types for convenience.
pub use backend::VaultBackend;
pub use config::UploadConfig;
pub use coordinator::ArchiveUploader;
pub use error::UploadError;
pub use part_reader::{Part, PartReader};
pub use part_size::{DEFAULT_PART_SIZE, MAX_PART_SIZE, MIN_PART_SIZE, is_valid_part_size};
pub use types::{ArchiveReceipt, UploadEvent, UploadSession, UploadStatus};
