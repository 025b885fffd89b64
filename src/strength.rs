//! CredVault - Strength Estimator
//!
//! Heuristic entropy and crack-time estimation for candidate master
//! passwords. The entropy figure assumes uniform random selection from
//! the detected character classes, which overstates entropy for
//! human-chosen passwords; treat it as a UX signal, not a guarantee.

use serde::{Deserialize, Serialize};

/// Assumed offline attack rate (guesses per second)
pub const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.0;

/// Nominal class sizes: lowercase, uppercase, digits, symbols.
/// The symbol size is an approximation, not an exact alphabet count.
const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 32;

/// Qualitative strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Bucket years-to-crack into a tier. Boundaries are half-open on
    /// the upper side: a value exactly at a boundary belongs to the
    /// next tier up.
    pub fn from_years(years: f64) -> Self {
        if years < 0.001 {
            Self::VeryWeak
        } else if years < 1.0 {
            Self::Weak
        } else if years < 1_000.0 {
            Self::Moderate
        } else if years < 1_000_000.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Human time estimate shown next to the tier
    pub fn time_description(&self) -> &'static str {
        match self {
            Self::VeryWeak => "instantly",
            Self::Weak => "days",
            Self::Moderate => "years",
            Self::Strong => "thousands of years",
            Self::VeryStrong => "millions of years",
        }
    }
}

/// Strength report for one candidate password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub entropy_bits: f64,
    pub crack_time_display: String,
    pub strength: Strength,
}

/// Estimate password entropy in bits
///
/// Detects which character classes appear anywhere in the password,
/// sums their nominal sizes into an effective alphabet `A`, and
/// returns `length * log2(A)`.
pub fn estimate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut alphabet = 0u32;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        alphabet += LOWER_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        alphabet += UPPER_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        alphabet += DIGIT_SIZE;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        alphabet += SYMBOL_SIZE;
    }

    password.chars().count() as f64 * (alphabet as f64).log2()
}

/// Estimate time-to-crack under the fixed offline attack rate
pub fn estimate_crack_time(password: &str) -> StrengthReport {
    let entropy_bits = estimate_entropy(password);
    let seconds = entropy_bits.exp2() / GUESSES_PER_SECOND;
    let years = seconds / SECONDS_PER_YEAR;
    let strength = Strength::from_years(years);

    StrengthReport {
        entropy_bits,
        crack_time_display: strength.time_description().to_string(),
        strength,
    }
}
