//! Password policy checks.
//!
//! Length is counted in characters, not bytes.

use crate::cs::error::{Error, Result};

/// Shortest password accepted for encoding.
pub const DEFAULT_MIN_LENGTH: usize = 6;
/// Longest password accepted for encoding.
pub const DEFAULT_MAX_LENGTH: usize = 20;
/// Shortest password that can be considered strong.
pub const DEFAULT_STRONG_MIN_LENGTH: usize = 8;

/// Returns `true` if `password` has between `min` and `max` characters, inclusive.
///
/// # Examples
///
/// ```
/// use pwcodec::cs::security::password_policy::is_length_valid;
///
/// assert!(is_length_valid("secret", 6, 20));
/// assert!(!is_length_valid("short", 6, 20));
/// ```
pub fn is_length_valid(password: &str, min: usize, max: usize) -> bool {
    let length = password.chars().count();
    length >= min && length <= max
}

/// Returns `true` if `password` has at least 8 characters and contains an
/// uppercase letter, a lowercase letter, a digit and some other character.
pub fn is_strong(password: &str) -> bool {
    PasswordPolicy::default().is_strong(password)
}

/// Length bounds applied to passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub strong_min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            strong_min_length: DEFAULT_STRONG_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn check_length(&self, password: &str) -> bool {
        is_length_valid(password, self.min_length, self.max_length)
    }

    /// Strength check. Any character that is not an ASCII letter or digit
    /// counts as special.
    pub fn is_strong(&self, password: &str) -> bool {
        if password.chars().count() < self.strong_min_length {
            return false;
        }
        let (mut upper, mut lower, mut digit, mut special) = (false, false, false, false);
        for ch in password.chars() {
            if ch.is_ascii_uppercase() {
                upper = true;
            } else if ch.is_ascii_lowercase() {
                lower = true;
            } else if ch.is_ascii_digit() {
                digit = true;
            } else {
                special = true;
            }
        }
        upper && lower && digit && special
    }

    /// Checks the length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PolicyViolation`] naming the bounds if the length is out of range.
    pub fn validate(&self, password: &str) -> Result<()> {
        if self.check_length(password) {
            Ok(())
        } else {
            Err(Error::PolicyViolation(format!(
                "password length should be between {} and {} characters, got {}",
                self.min_length,
                self.max_length,
                password.chars().count()
            )))
        }
    }
}
