//! # CredVault - Zero-Knowledge Credential Vault Core
//!
//! Client-side cryptography for a zero-knowledge vault: records are
//! encrypted before they ever leave the client, and the server only
//! sees opaque `{encrypted, salt, iv}` blobs.
//!
//! ## Security Model
//!
//! - Records encrypted with AES-256-GCM (confidentiality + tamper detection)
//! - Key derived per operation via PBKDF2-HMAC-SHA256 (100k iterations)
//! - Fresh random salt and nonce for every encryption
//! - Wrong password, corruption and tampering are indistinguishable on decrypt
//! - Passwords and derived keys held in zeroizing wrappers, never logged
//!
//! ## Modules
//!
//! - [`crypto`]: key derivation and authenticated record encryption
//! - [`encoding`]: base64 boundary codec
//! - [`record`]: the plaintext record and its byte codec
//! - [`generator`]: policy-driven secure password generation
//! - [`strength`]: entropy and crack-time estimation
//! - [`transfer`]: versioned bulk export/import
//! - [`session`]: async facade scoping the master password

pub mod crypto;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod record;
pub mod session;
pub mod strength;
pub mod transfer;

// Re-exports
pub use crypto::{decrypt_record, derive_key, encrypt_record, EncryptedBlob, MasterPassword};
pub use error::{Result, VaultError};
pub use generator::{generate, PasswordPolicy};
pub use record::VaultRecord;
pub use session::VaultSession;
pub use strength::{estimate_crack_time, estimate_entropy, Strength, StrengthReport};
pub use transfer::{export_vault, import_vault, ExportContainer, EXPORT_VERSION};

/// Library version
pub const VERSION: &str = "1.0.0";
