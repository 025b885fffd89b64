//! CredVault - Vault Session
//!
//! Async facade over the synchronous crypto core. Key derivation is
//! deliberately expensive, so every operation runs on the blocking
//! thread pool and suspends the calling task instead of stalling the
//! host runtime.
//!
//! The master password lives inside the session object only; there is
//! no global or ambient password state. Dropping the session drops
//! the password.

use std::sync::Arc;

use secrecy::SecretBox;
use tracing::debug;

use crate::crypto::{self, EncryptedBlob, MasterPassword};
use crate::error::{Result, VaultError};
use crate::record::VaultRecord;
use crate::transfer;

/// A master-password-scoped handle for vault crypto operations.
///
/// Each method call is independent: fresh salt and iv per encryption,
/// no shared mutable state, safe to use from concurrent tasks.
#[derive(Clone)]
pub struct VaultSession {
    master_password: Arc<MasterPassword>,
}

impl VaultSession {
    /// Open a session, taking ownership of the master password
    pub fn new(master_password: String) -> Self {
        debug!("opening vault session");
        Self {
            master_password: Arc::new(SecretBox::new(Box::new(master_password))),
        }
    }

    /// Encrypt a record under the session's master password
    pub async fn encrypt(&self, record: VaultRecord) -> Result<EncryptedBlob> {
        let password = Arc::clone(&self.master_password);
        spawn_crypto(move || crypto::encrypt_record(&record, &password)).await
    }

    /// Decrypt a blob under the session's master password
    pub async fn decrypt(&self, blob: EncryptedBlob) -> Result<VaultRecord> {
        let password = Arc::clone(&self.master_password);
        spawn_crypto(move || crypto::decrypt_record(&blob, &password)).await
    }

    /// Export records as versioned container text
    ///
    /// Items are encrypted concurrently on the blocking pool; the
    /// container preserves input order.
    pub async fn export(&self, records: Vec<VaultRecord>) -> Result<String> {
        debug!(items = records.len(), "exporting vault");

        let handles: Vec<_> = records
            .into_iter()
            .map(|record| {
                let password = Arc::clone(&self.master_password);
                tokio::task::spawn_blocking(move || crypto::encrypt_record(&record, &password))
            })
            .collect();

        let mut blobs = Vec::with_capacity(handles.len());
        for handle in handles {
            blobs.push(
                handle
                    .await
                    .map_err(|e| VaultError::TaskFailed(e.to_string()))??,
            );
        }

        transfer::ExportContainer::new(blobs).to_json()
    }

    /// Import records from container text, all-or-nothing
    ///
    /// Items are decrypted concurrently on the blocking pool and
    /// joined in container order. If any item fails to decrypt, no
    /// records are returned and the failure is masked as
    /// [`VaultError::ImportDecryptionFailed`].
    pub async fn import(&self, container: String) -> Result<Vec<VaultRecord>> {
        let container = transfer::ExportContainer::from_json(&container)?;
        debug!(
            version = container.version,
            items = container.items.len(),
            "importing vault"
        );

        let handles: Vec<_> = container
            .items
            .into_iter()
            .map(|blob| {
                let password = Arc::clone(&self.master_password);
                tokio::task::spawn_blocking(move || crypto::decrypt_record(&blob, &password))
            })
            .collect();

        let mut records = Vec::with_capacity(handles.len());
        for handle in handles {
            let record = handle
                .await
                .map_err(|e| VaultError::TaskFailed(e.to_string()))?
                .map_err(|_| VaultError::ImportDecryptionFailed)?;
            records.push(record);
        }

        Ok(records)
    }
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("master_password", &"[REDACTED]")
            .finish()
    }
}

/// Run a CPU-bound crypto closure on the blocking pool
async fn spawn_crypto<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| VaultError::TaskFailed(e.to_string()))?
}
