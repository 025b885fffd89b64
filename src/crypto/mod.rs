//! Cryptographic module - PBKDF2-HMAC-SHA256 key derivation and
//! AES-256-GCM record encryption

mod aead;
mod kdf;

pub use aead::{decrypt_record, encrypt_record, EncryptedBlob};
pub use kdf::{derive_key, generate_nonce, generate_salt, PBKDF2_ITERATIONS};

use secrecy::SecretBox;

/// Symmetric key length (AES-256)
pub const KEY_LEN: usize = 32;

/// Salt length for key derivation
pub const SALT_LEN: usize = 16;

/// Nonce length for AES-GCM
pub const NONCE_LEN: usize = 12;

/// Secure wrapper around derived key material
pub type SecretKey = SecretBox<[u8; KEY_LEN]>;

/// Secure wrapper around the master password
pub type MasterPassword = SecretBox<String>;
