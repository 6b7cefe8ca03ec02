//! Vault backend trait.
//!
//! `VaultBackend` is implemented by the application to bridge the
//! upload flow to the actual storage transport. Using a trait keeps the
//! coordinator decoupled from the network client and testable with
//! in-memory doubles that verify checksums the way the real service
//! does.

use std::future::Future;
use std::pin::Pin;

use coldvault_protocol::{
    CompleteUploadRequest, CompleteUploadResponse, InitiateUploadRequest, InitiateUploadResponse,
    UploadPartRequest, UploadPartResponse,
};

use crate::error::UploadError;

/// Abstract connection to the cold-storage vault service.
///
/// Exactly the three operations the service exposes. Implementations
/// own retry/backoff policy for transient transport failures; the
/// coordinator never retries.
pub trait VaultBackend: Send + Sync {
    /// Opens a multipart upload session.
    ///
    /// Service-side failures (auth, vault not found) surface as
    /// [`UploadError::Backend`] and are propagated unchanged.
    fn initiate_upload(
        &self,
        req: &InitiateUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InitiateUploadResponse, UploadError>> + Send + '_>>;

    /// Submits one part body with its declared byte range and tree hash.
    ///
    /// The service recomputes the tree hash over the received bytes and
    /// rejects the call when it disagrees with the declared checksum;
    /// that rejection surfaces as [`UploadError::ChecksumMismatch`].
    fn upload_part(
        &self,
        req: &UploadPartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<UploadPartResponse, UploadError>> + Send + '_>>;

    /// Finalizes the session.
    ///
    /// The service validates that the declared archive size equals the
    /// sum of the received parts and that the declared checksum equals
    /// its own independently computed whole-archive tree hash.
    fn complete_upload(
        &self,
        req: &CompleteUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompleteUploadResponse, UploadError>> + Send + '_>>;
}
