//! Upload coordinator.
//!
//! Drives the three-phase upload protocol against a [`VaultBackend`]:
//! initiate, upload parts, complete. Parts are read sequentially through
//! a forward-only cursor; the whole-archive digest sequence accumulates
//! in the same pass, so the file is read exactly once.

use std::path::Path;

use coldvault_protocol::{CompleteUploadRequest, InitiateUploadRequest, UploadPartRequest};
use coldvault_treehash::{ChunkDigester, Digest, tree_hash};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::backend::VaultBackend;
use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::part_reader::PartReader;
use crate::types::{ArchiveReceipt, UploadEvent, UploadSession, UploadStatus};

/// Coordinates one archive upload against a vault backend.
///
/// One upload at a time: the archive's byte source is consumed through
/// a single forward-only cursor, so parts go out strictly in order.
pub struct ArchiveUploader<'a> {
    backend: &'a dyn VaultBackend,
    config: UploadConfig,
}

impl std::fmt::Debug for ArchiveUploader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveUploader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> ArchiveUploader<'a> {
    /// Creates an uploader, validating the configuration.
    ///
    /// An invalid part size is rejected here, before any backend call.
    pub fn new(backend: &'a dyn VaultBackend, config: UploadConfig) -> Result<Self, UploadError> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Runs the full upload pipeline for one archive file.
    ///
    /// 1. Open the archive (missing or empty files fail fast)
    /// 2. Initiate the session
    /// 3. Upload Part-Size windows, each with its own tree hash
    /// 4. Complete with the whole-archive tree hash and byte length
    ///
    /// Progress is reported through `events_tx`; a receiver that falls
    /// behind or hangs up never fails the upload.
    pub async fn upload(
        &self,
        archive_path: &Path,
        events_tx: &mpsc::Sender<UploadEvent>,
    ) -> Result<ArchiveReceipt, UploadError> {
        let reader = tokio::task::spawn_blocking({
            let path = archive_path.to_path_buf();
            let part_size = self.config.part_size;
            move || PartReader::new(&path, part_size)
        })
        .await
        .map_err(std::io::Error::other)??;

        if reader.archive_len() == 0 {
            return Err(UploadError::Config(format!(
                "archive {} is empty",
                archive_path.display()
            )));
        }
        let archive_size = reader.archive_len();

        let mut session = self.initiate().await?;
        let _ = events_tx
            .send(UploadEvent::Initiated {
                upload_id: session.upload_id.clone(),
            })
            .await;

        let result = async {
            let digests = self.upload_parts(&mut session, reader, events_tx).await?;
            self.complete(&mut session, &digests, archive_size).await
        }
        .await;

        match result {
            Ok(receipt) => {
                let _ = events_tx
                    .send(UploadEvent::Completed {
                        archive_id: receipt.archive_id.clone(),
                    })
                    .await;
                Ok(receipt)
            }
            Err(e) => {
                error!(upload_id = %session.upload_id, error = %e, "upload failed");
                let _ = events_tx
                    .send(UploadEvent::Failed {
                        error: e.to_string(),
                    })
                    .await;
                Err(e)
            }
        }
    }

    /// Opens an upload session on the vault.
    pub async fn initiate(&self) -> Result<UploadSession, UploadError> {
        let req = InitiateUploadRequest {
            vault_name: self.config.vault_name.clone(),
            archive_description: self.config.archive_description.clone(),
            part_size: self.config.part_size,
        };
        let resp = self.backend.initiate_upload(&req).await?;

        info!(
            vault = %self.config.vault_name,
            upload_id = %resp.upload_id,
            part_size = self.config.part_size,
            "upload initiated"
        );

        Ok(UploadSession {
            upload_id: resp.upload_id,
            part_size: self.config.part_size,
            status: UploadStatus::InProgress,
        })
    }

    /// Uploads all parts of the archive and returns the whole-archive
    /// digest sequence gathered during the same pass.
    ///
    /// For every part, the declared range, the transmitted bytes, and
    /// the declared tree hash describe exactly the same window. The
    /// returned sequence uses 1 MiB chunk boundaries spanning the whole
    /// file, tracked independently of the part windows.
    pub async fn upload_parts(
        &self,
        session: &mut UploadSession,
        reader: PartReader,
        events_tx: &mpsc::Sender<UploadEvent>,
    ) -> Result<Vec<Digest>, UploadError> {
        match self.send_parts(session, reader, events_tx).await {
            Ok(digests) => Ok(digests),
            Err(e) => {
                session.status = UploadStatus::Failed;
                Err(e)
            }
        }
    }

    async fn send_parts(
        &self,
        session: &UploadSession,
        mut reader: PartReader,
        events_tx: &mpsc::Sender<UploadEvent>,
    ) -> Result<Vec<Digest>, UploadError> {
        let mut whole_archive = ChunkDigester::new();

        loop {
            let (returned, next) = tokio::task::spawn_blocking(move || {
                let next = reader.next_part();
                (reader, next)
            })
            .await
            .map_err(std::io::Error::other)?;
            reader = returned;

            let Some(part) = next? else {
                break;
            };

            // Whole-archive chunk boundaries are tracked independently
            // of the part windows.
            whole_archive.update(&part.data);

            let checksum = part.tree_hash.to_hex();
            debug!(
                upload_id = %session.upload_id,
                range = %part.range,
                checksum = %checksum,
                "uploading part"
            );

            let req = UploadPartRequest {
                vault_name: self.config.vault_name.clone(),
                upload_id: session.upload_id.clone(),
                range: part.range,
                checksum: checksum.clone(),
                data: part.data,
            };
            let resp = self.backend.upload_part(&req).await?;
            debug!(range = %part.range, accepted = %resp.checksum, "part accepted");

            let _ = events_tx
                .send(UploadEvent::PartUploaded {
                    range: part.range,
                    checksum,
                })
                .await;
        }

        Ok(whole_archive.finish())
    }

    /// Finalizes the session with the whole-archive tree hash and the
    /// exact byte length, returning the backend's receipt.
    pub async fn complete(
        &self,
        session: &mut UploadSession,
        digests: &[Digest],
        archive_size: u64,
    ) -> Result<ArchiveReceipt, UploadError> {
        match self.finalize(session, digests, archive_size).await {
            Ok(receipt) => {
                session.status = UploadStatus::Completed;
                Ok(receipt)
            }
            Err(e) => {
                session.status = UploadStatus::Failed;
                Err(e)
            }
        }
    }

    async fn finalize(
        &self,
        session: &UploadSession,
        digests: &[Digest],
        archive_size: u64,
    ) -> Result<ArchiveReceipt, UploadError> {
        let checksum = tree_hash(digests)?.to_hex();

        let req = CompleteUploadRequest {
            vault_name: self.config.vault_name.clone(),
            upload_id: session.upload_id.clone(),
            checksum: checksum.clone(),
            archive_size,
        };
        let resp = self.backend.complete_upload(&req).await?;

        info!(
            upload_id = %session.upload_id,
            archive_id = %resp.archive_id,
            size = archive_size,
            "upload completed"
        );

        Ok(ArchiveReceipt {
            archive_id: resp.archive_id,
            location: resp.location,
            checksum,
            archive_size,
        })
    }
}
