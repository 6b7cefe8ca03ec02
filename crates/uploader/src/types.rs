//! Data types for the upload flow.

use coldvault_protocol::ByteRange;
use serde::{Deserialize, Serialize};

/// Lifecycle of an upload session.
///
/// `Uninitiated → InProgress → Completed`; any unhandled failure while
/// in progress moves the session to `Failed`, which is terminal. No
/// rollback or abort of backend state is performed; cleaning up an
/// abandoned session is an operational concern outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uninitiated,
    InProgress,
    Completed,
    Failed,
}

/// An open upload session on the vault.
///
/// Holds nothing beyond what the backend tracks: the opaque upload id
/// and the part size the session was opened with. There is no local
/// persistence of progress.
#[derive(Debug, Clone)]
pub struct UploadSession {
    pub upload_id: String,
    pub part_size: u64,
    pub status: UploadStatus,
}

impl UploadSession {
    /// Returns `true` while parts may still be uploaded.
    pub fn is_active(&self) -> bool {
        self.status == UploadStatus::InProgress
    }
}

/// Receipt returned when the backend finalizes an archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveReceipt {
    pub archive_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Hex tree hash of the whole archive.
    pub checksum: String,
    pub archive_size: u64,
}

/// Progress event emitted during an upload.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// Session opened on the vault.
    Initiated { upload_id: String },
    /// One part accepted by the backend.
    PartUploaded { range: ByteRange, checksum: String },
    /// Upload finalized.
    Completed { archive_id: String },
    /// Upload aborted with an error.
    Failed { error: String },
}
