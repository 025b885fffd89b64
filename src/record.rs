//! CredVault - Vault Record
//!
//! The plaintext credential record and its byte codec. Records exist
//! only in process memory for the duration of an encrypt or decrypt
//! call and are zeroized on drop.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, VaultError};

/// A plaintext credential record. Never persisted or transmitted;
/// only its encrypted form leaves the process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct VaultRecord {
    /// Display title ("Bank", "Work email", ...)
    pub title: String,
    /// Login / account name
    pub username: String,
    /// The stored secret
    pub password: String,
    /// Site or service URL
    pub url: String,
    /// Free-form notes
    pub notes: String,
}

impl std::fmt::Debug for VaultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultRecord")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("url", &self.url)
            .field("notes", &self.notes)
            .finish()
    }
}

/// Serialize a record to field-tagged UTF-8 bytes (JSON)
pub fn serialize_record(record: &VaultRecord) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| VaultError::Serialization(e.to_string()))
}

/// Deserialize a record from field-tagged UTF-8 bytes
///
/// Fails if required fields are absent or the bytes are not valid JSON.
pub fn deserialize_record(bytes: &[u8]) -> Result<VaultRecord> {
    serde_json::from_slice(bytes).map_err(|e| VaultError::MalformedRecord(e.to_string()))
}
