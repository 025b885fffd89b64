//! AES-256-GCM authenticated record encryption
//!
//! Wire shape of an encrypted record (JSON, each field base64):
//! ```text
//! { "encrypted": "<ciphertext + GCM tag>", "salt": "<16 bytes>", "iv": "<12 bytes>" }
//! ```
//!
//! Salt and iv are freshly random for every encryption; reuse of a
//! (key, iv) pair would break both confidentiality and integrity.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::crypto::kdf::{derive_key, generate_nonce, generate_salt};
use crate::crypto::{MasterPassword, NONCE_LEN, SALT_LEN};
use crate::encoding;
use crate::error::{Result, VaultError};
use crate::record::{self, VaultRecord};

/// The only form of a record that is ever persisted or transmitted.
/// Opaque to every component except this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    /// Ciphertext with appended GCM auth tag, base64
    pub encrypted: String,
    /// KDF salt (16 raw bytes), base64
    pub salt: String,
    /// AES-GCM nonce (12 raw bytes), base64
    pub iv: String,
}

/// Encrypt a record under the master password
///
/// Generates a fresh salt and nonce for this call only, derives the
/// key, serializes the record and encrypts in one authenticated pass.
pub fn encrypt_record(
    record: &VaultRecord,
    master_password: &MasterPassword,
) -> Result<EncryptedBlob> {
    let salt = generate_salt()?;
    let key = derive_key(master_password, &salt)?;

    let nonce_bytes = generate_nonce()?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let plaintext = Zeroizing::new(record::serialize_record(record)?);

    let cipher = Aes256Gcm::new_from_slice(key.expose_secret())
        .map_err(|_| VaultError::EncryptionFailed("invalid key length".into()))?;

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_slice())
        .map_err(|_| VaultError::EncryptionFailed("AES-GCM encryption failed".into()))?;

    Ok(EncryptedBlob {
        encrypted: encoding::encode(&ciphertext),
        salt: encoding::encode(&salt),
        iv: encoding::encode(&nonce_bytes),
    })
}

/// Decrypt a blob under the master password
///
/// Re-derives the key from the stored salt and verifies the GCM tag.
/// Wrong password, corruption and tampering all surface as the same
/// [`VaultError::DecryptionFailed`]; no partial data is ever returned.
pub fn decrypt_record(
    blob: &EncryptedBlob,
    master_password: &MasterPassword,
) -> Result<VaultRecord> {
    let ciphertext = encoding::decode(&blob.encrypted)?;
    let salt_bytes = encoding::decode(&blob.salt)?;
    let iv_bytes = encoding::decode(&blob.iv)?;

    // Wrong-length salt or iv means the blob is corrupt
    let salt: [u8; SALT_LEN] = salt_bytes
        .as_slice()
        .try_into()
        .map_err(|_| VaultError::DecryptionFailed)?;
    if iv_bytes.len() != NONCE_LEN {
        return Err(VaultError::DecryptionFailed);
    }

    let key = derive_key(master_password, &salt)?;

    let cipher = Aes256Gcm::new_from_slice(key.expose_secret())
        .map_err(|_| VaultError::DecryptionFailed)?;

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(&iv_bytes), ciphertext.as_slice())
            .map_err(|_| VaultError::DecryptionFailed)?,
    );

    record::deserialize_record(&plaintext)
}
