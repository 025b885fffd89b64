//! CredVault - Encoding Layer
//!
//! Byte-accurate base64 codec for the storage/transport boundary.
//! Everything that leaves the crypto layer crosses here as text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode bytes as standard base64 text
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 text back to bytes
///
/// Fails on non-base64 characters or invalid padding.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"CredVault binary \x00\x01\x02\xff payload";
        let text = encode(data);
        let back = decode(&text).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_empty_roundtrip() {
        let text = encode(b"");
        assert_eq!(text, "");
        assert_eq!(decode(&text).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_large_roundtrip() {
        let data: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
        let text = encode(&data);
        assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn test_invalid_input_fails() {
        assert!(decode("not base64!!!").is_err());
        assert!(decode("AAA=AAA").is_err());
    }
}
