//! CredVault - Bulk Export/Import
//!
//! Versioned portable container for a whole vault. Every item is an
//! independently encrypted blob (own salt, own iv) under the same
//! master password; the container itself carries no secrets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto::{decrypt_record, encrypt_record, EncryptedBlob, MasterPassword};
use crate::error::{Result, VaultError};
use crate::record::VaultRecord;

/// Current container format version
pub const EXPORT_VERSION: u32 = 1;

/// The on-disk/portable bulk format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportContainer {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub items: Vec<EncryptedBlob>,
}

impl ExportContainer {
    /// Wrap encrypted blobs with the current version and a generation timestamp
    pub fn new(items: Vec<EncryptedBlob>) -> Self {
        Self {
            version: EXPORT_VERSION,
            timestamp: Some(Utc::now()),
            items,
        }
    }

    /// Serialize to portable JSON text
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| VaultError::Serialization(e.to_string()))
    }

    /// Parse from JSON text, requiring the `version` and `items` fields
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| VaultError::InvalidContainer(e.to_string()))?;

        let object = value
            .as_object()
            .ok_or_else(|| VaultError::InvalidContainer("not a JSON object".into()))?;
        if !object.contains_key("version") {
            return Err(VaultError::InvalidContainer("missing version field".into()));
        }
        if !object.contains_key("items") {
            return Err(VaultError::InvalidContainer("missing items field".into()));
        }

        serde_json::from_value(value).map_err(|e| VaultError::InvalidContainer(e.to_string()))
    }
}

/// Export records as a versioned container, encrypting each item
/// independently under the master password. Output order matches
/// input order.
pub fn export_vault(records: &[VaultRecord], master_password: &MasterPassword) -> Result<String> {
    debug!(items = records.len(), "exporting vault");

    let blobs = records
        .iter()
        .map(|record| encrypt_record(record, master_password))
        .collect::<Result<Vec<_>>>()?;

    ExportContainer::new(blobs).to_json()
}

/// Parse a container and decrypt every item under the master password.
///
/// All-or-nothing: if any item fails to decrypt, no records are
/// returned and the failure is masked as
/// [`VaultError::ImportDecryptionFailed`].
pub fn import_vault(text: &str, master_password: &MasterPassword) -> Result<Vec<VaultRecord>> {
    let container = ExportContainer::from_json(text)?;
    debug!(
        version = container.version,
        items = container.items.len(),
        "importing vault"
    );

    let mut records = Vec::with_capacity(container.items.len());
    for blob in &container.items {
        let record =
            decrypt_record(blob, master_password).map_err(|_| VaultError::ImportDecryptionFailed)?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretBox;

    fn password(s: &str) -> MasterPassword {
        SecretBox::new(Box::new(s.to_string()))
    }

    fn record(title: &str) -> VaultRecord {
        VaultRecord {
            title: title.into(),
            username: format!("{}-user", title),
            password: format!("{}-secret", title),
            url: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_export_import_roundtrip_preserves_order() {
        let pw = password("correct horse battery");
        let records = vec![record("one"), record("two"), record("three")];

        let text = export_vault(&records, &pw).unwrap();
        let back = import_vault(&text, &pw).unwrap();

        assert_eq!(back, records);
    }

    #[test]
    fn test_container_shape() {
        let pw = password("correct horse battery");
        let text = export_vault(&[record("only")], &pw).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["timestamp"].is_string());
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_items_use_independent_salts() {
        let pw = password("correct horse battery");
        let text = export_vault(&[record("a"), record("a")], &pw).unwrap();

        let container = ExportContainer::from_json(&text).unwrap();
        assert_ne!(container.items[0].salt, container.items[1].salt);
        assert_ne!(container.items[0].iv, container.items[1].iv);
    }

    #[test]
    fn test_import_wrong_password_masked() {
        let text = export_vault(&[record("one")], &password("right")).unwrap();
        let result = import_vault(&text, &password("wrong"));

        assert!(matches!(result, Err(VaultError::ImportDecryptionFailed)));
    }

    #[test]
    fn test_import_atomic_on_corrupt_item() {
        let pw = password("correct horse battery");
        let text = export_vault(&[record("one"), record("two")], &pw).unwrap();

        let mut container = ExportContainer::from_json(&text).unwrap();
        // Corrupt the second item only
        container.items[1].encrypted = crate::encoding::encode(b"garbage ciphertext");
        let corrupted = container.to_json().unwrap();

        let result = import_vault(&corrupted, &pw);
        assert!(matches!(result, Err(VaultError::ImportDecryptionFailed)));
    }

    #[test]
    fn test_missing_version_rejected() {
        let result = ExportContainer::from_json(r#"{"items":[]}"#);
        assert!(matches!(result, Err(VaultError::InvalidContainer(_))));
    }

    #[test]
    fn test_missing_items_rejected() {
        let result = ExportContainer::from_json(r#"{"version":1}"#);
        assert!(matches!(result, Err(VaultError::InvalidContainer(_))));
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(
            ExportContainer::from_json("not json"),
            Err(VaultError::InvalidContainer(_))
        ));
        assert!(matches!(
            ExportContainer::from_json("[1,2,3]"),
            Err(VaultError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_missing_timestamp_tolerated() {
        let pw = password("correct horse battery");
        let container = ExportContainer::from_json(r#"{"version":1,"items":[]}"#).unwrap();
        assert!(container.timestamp.is_none());

        assert_eq!(import_vault(r#"{"version":1,"items":[]}"#, &pw).unwrap(), vec![]);
    }

    #[test]
    fn test_empty_vault_roundtrip() {
        let pw = password("correct horse battery");
        let text = export_vault(&[], &pw).unwrap();
        assert!(import_vault(&text, &pw).unwrap().is_empty());
    }
}
