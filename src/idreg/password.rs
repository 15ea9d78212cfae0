//! Password generation and strength policy.
//!
//! The policy, checked in order and stopping at the first failure:
//! 1. at least [`MIN_PASSWORD_LENGTH`] characters
//! 2. a lowercase letter
//! 3. an uppercase letter
//! 4. a digit
//! 5. an ASCII punctuation character
//!
//! [`generate_password`] draws uniformly from the full alphabet and does not
//! retry, so a short generated password can miss a character class and fail
//! [`validate_password`]. Callers that need a guaranteed pass should check
//! the result.

use crate::error::{IdregError, Result};
use rand::Rng;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub const STRONG_ENOUGH: &str = "Password is strong enough.";

/// First policy rule a password breaks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    #[error("Password is too short (minimum {} characters).", MIN_PASSWORD_LENGTH)]
    TooShort,
    #[error("Password must contain at least one lowercase letter.")]
    MissingLowercase,
    #[error("Password must contain at least one uppercase letter.")]
    MissingUppercase,
    #[error("Password must contain at least one digit.")]
    MissingDigit,
    #[error("Password must contain at least one special character.")]
    MissingSpecial,
}

/// Generate a random password using the thread-local RNG.
///
/// Fails with [`IdregError::PasswordTooShort`] when `length` is below
/// [`MIN_PASSWORD_LENGTH`].
pub fn generate_password(length: usize) -> Result<String> {
    generate_password_with(length, &mut rand::thread_rng())
}

pub fn generate_password_with<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(IdregError::PasswordTooShort {
            requested: length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }

    Ok((0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect())
}

pub fn check_password(password: &str) -> std::result::Result<(), PasswordIssue> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(PasswordIssue::MissingLowercase);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(PasswordIssue::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::MissingDigit);
    }
    if !password.chars().any(|c| c.is_ascii_punctuation()) {
        return Err(PasswordIssue::MissingSpecial);
    }
    Ok(())
}

/// Pair form of [`check_password`]: `(passed, message)`.
pub fn validate_password(password: &str) -> (bool, String) {
    match check_password(password) {
        Ok(()) => (true, STRONG_ENOUGH.to_string()),
        Err(issue) => (false, issue.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_rejects_short_length() {
        let err = generate_password(4).unwrap_err();
        assert!(matches!(
            err,
            IdregError::PasswordTooShort {
                requested: 4,
                minimum: 8
            }
        ));
        assert!(generate_password(7).is_err());
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate_password(DEFAULT_PASSWORD_LENGTH).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_minimum_and_long_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_password_with(8, &mut rng).unwrap().len(), 8);
        assert_eq!(generate_password_with(64, &mut rng).unwrap().len(), 64);
    }

    #[test]
    fn test_alphabet_covers_every_class() {
        assert_eq!(ALPHABET.len(), 26 + 26 + 10 + 32);
        assert!(ALPHABET.iter().any(u8::is_ascii_lowercase));
        assert!(ALPHABET.iter().any(u8::is_ascii_uppercase));
        assert!(ALPHABET.iter().any(u8::is_ascii_digit));
        assert_eq!(
            ALPHABET.iter().filter(|b| b.is_ascii_punctuation()).count(),
            32
        );
    }

    #[test]
    fn test_validate_short() {
        let (ok, message) = validate_password("short");
        assert!(!ok);
        assert_eq!(message, PasswordIssue::TooShort.to_string());
        assert!(message.contains("too short"));
    }

    #[test]
    fn test_validate_strong() {
        assert_eq!(
            validate_password("Abcdef12!"),
            (true, STRONG_ENOUGH.to_string())
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        assert_eq!(
            check_password("ABCDEFG1!"),
            Err(PasswordIssue::MissingLowercase)
        );
        assert_eq!(
            check_password("abcdefg1!"),
            Err(PasswordIssue::MissingUppercase)
        );
        assert_eq!(
            check_password("Abcdefgh!"),
            Err(PasswordIssue::MissingDigit)
        );
        assert_eq!(
            check_password("Abcdefgh1"),
            Err(PasswordIssue::MissingSpecial)
        );
        // Too short wins over every missing class.
        assert_eq!(check_password("a"), Err(PasswordIssue::TooShort));
    }
}
