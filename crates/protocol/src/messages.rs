use serde::{Deserialize, Serialize};

use crate::range::ByteRange;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Opens a multipart upload session on a vault.
///
/// The part size is fixed for the lifetime of the session; the service
/// rejects sizes outside its accepted set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateUploadRequest {
    pub vault_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub archive_description: String,
    pub part_size: u64,
}

/// Submits one part of the archive.
///
/// `checksum` is the hex tree hash the caller computed over `data`; the
/// service recomputes it over the received bytes and rejects the call on
/// disagreement. The `data` field is base64-encoded in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPartRequest {
    pub vault_name: String,
    pub upload_id: String,
    pub range: ByteRange,
    pub checksum: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Finalizes an upload session.
///
/// `checksum` is the hex tree hash of the whole archive over 1 MiB
/// chunk boundaries spanning the entire file, independent of how the
/// archive was split into parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub vault_name: String,
    pub upload_id: String,
    pub checksum: String,
    pub archive_size: u64,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Response to [`InitiateUploadRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateUploadResponse {
    /// Opaque session identifier assigned by the service.
    pub upload_id: String,
}

/// Response to [`UploadPartRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPartResponse {
    /// Tree hash the service computed over the received bytes. Matches
    /// the declared checksum whenever the call succeeds.
    pub checksum: String,
}

/// Response to [`CompleteUploadRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadResponse {
    /// Identifier of the finalized archive.
    pub archive_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
}

mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(data).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
