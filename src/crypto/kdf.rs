//! PBKDF2-HMAC-SHA256 KDF for deriving the record key from the master password

use hmac::Hmac;
use pbkdf2::pbkdf2;
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;

use crate::crypto::{MasterPassword, SecretKey, KEY_LEN, NONCE_LEN, SALT_LEN};
use crate::error::{Result, VaultError};

/// Fixed PBKDF2 work factor.
///
/// A compile-time constant, not negotiated: old blobs are only
/// decryptable while this value stays unchanged, since the iteration
/// count is not persisted alongside the ciphertext.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 256-bit AES key from the master password and a 16-byte salt
///
/// Deterministic for a given (password, salt) pair. The salt must be
/// freshly generated for every encryption and stored with the blob.
pub fn derive_key(master_password: &MasterPassword, salt: &[u8; SALT_LEN]) -> Result<SecretKey> {
    let mut key = Box::new([0u8; KEY_LEN]);

    pbkdf2::<Hmac<Sha256>>(
        master_password.expose_secret().as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        key.as_mut_slice(),
    )
    .map_err(|e| VaultError::KeyDerivationFailed(e.to_string()))?;

    Ok(SecretBox::new(key))
}

/// Generate a fresh random salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt)
        .map_err(|e| VaultError::KeyDerivationFailed(format!("RNG failed: {}", e)))?;
    Ok(salt)
}

/// Generate a fresh random nonce for AES-GCM
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| VaultError::KeyDerivationFailed(format!("RNG failed: {}", e)))?;
    Ok(nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> MasterPassword {
        SecretBox::new(Box::new(s.to_string()))
    }

    #[test]
    fn test_derive_key_deterministic() {
        let pw = password("correct horse battery");
        let salt = [7u8; SALT_LEN];

        let k1 = derive_key(&pw, &salt).unwrap();
        let k2 = derive_key(&pw, &salt).unwrap();

        assert_eq!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn test_different_passwords_different_keys() {
        let salt = [7u8; SALT_LEN];

        let k1 = derive_key(&password("alpha"), &salt).unwrap();
        let k2 = derive_key(&password("bravo"), &salt).unwrap();

        assert_ne!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn test_different_salts_different_keys() {
        let pw = password("same password");

        let k1 = derive_key(&pw, &[1u8; SALT_LEN]).unwrap();
        let k2 = derive_key(&pw, &[2u8; SALT_LEN]).unwrap();

        assert_ne!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn test_generate_salt_fresh() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_generate_nonce_fresh() {
        let n1 = generate_nonce().unwrap();
        let n2 = generate_nonce().unwrap();
        assert_ne!(n1, n2);
    }
}
