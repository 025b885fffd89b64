//! CredVault - Error Types

use thiserror::Error;

/// Result type for vault operations
pub type Result<T> = std::result::Result<T, VaultError>;

/// Vault error types
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong password, corrupted ciphertext, or tampering. The cipher
    /// yields a single failure signal; the cases are indistinguishable.
    #[error("Decryption failed - wrong password or corrupted data")]
    DecryptionFailed,

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid password policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid export container: {0}")]
    InvalidContainer(String),

    /// Any item in a bulk import failed to decrypt. Masked like
    /// [`VaultError::DecryptionFailed`] to avoid diagnosing which item
    /// (or why) decryption failed.
    #[error("Import failed - check your master password")]
    ImportDecryptionFailed,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl VaultError {
    /// Check if this is a security-critical error
    pub fn is_security_critical(&self) -> bool {
        matches!(
            self,
            VaultError::DecryptionFailed | VaultError::ImportDecryptionFailed
        )
    }
}
