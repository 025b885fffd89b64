//! CredVault - Password Generator
//!
//! Policy-driven random password generation. Every character is drawn
//! independently and uniformly from the final charset using the OS
//! CSPRNG, so the entropy model in [`crate::strength`] holds.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually confusable characters removed by `exclude_ambiguous`
const AMBIGUOUS: &str = "il1Lo0O";

/// Character-class policy for one generation call. Letters are always
/// included; the ambiguous-character removal runs after the digit and
/// symbol classes are added, so it can shrink but never empty the set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Output length in characters (>= 1)
    pub length: usize,
    /// Add the digit class
    pub include_numbers: bool,
    /// Add the fixed symbol class
    pub include_symbols: bool,
    /// Remove `i l 1 L o 0 O` from the final set
    pub exclude_ambiguous: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Generate a random password under the given policy
pub fn generate(policy: &PasswordPolicy) -> Result<String> {
    if policy.length == 0 {
        return Err(VaultError::InvalidPolicy(
            "password length must be at least 1".into(),
        ));
    }

    let mut charset: Vec<char> = LOWERCASE.chars().chain(UPPERCASE.chars()).collect();
    if policy.include_numbers {
        charset.extend(DIGITS.chars());
    }
    if policy.include_symbols {
        charset.extend(SYMBOLS.chars());
    }
    if policy.exclude_ambiguous {
        charset.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if charset.is_empty() {
        return Err(VaultError::InvalidPolicy("character set is empty".into()));
    }

    let mut rng = OsRng;
    let password = (0..policy.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    Ok(password)
}
