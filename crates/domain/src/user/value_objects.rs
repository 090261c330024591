//! Value objects for the user domain.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Dot-atom local part, then a domain of at least two labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("email pattern compiles")
});

/// A syntactically valid email address, kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Longest accepted address.
    pub const MAX_LENGTH: usize = 254;

    /// Longest accepted part before the `@`.
    pub const MAX_LOCAL_PART_LENGTH: usize = 64;

    /// Creates an email address, rejecting anything that is not well formed.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidEmail { value }.reject());
        }
        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        if value.len() > Self::MAX_LENGTH {
            return false;
        }
        match value.split_once('@') {
            Some((local, _)) if local.len() <= Self::MAX_LOCAL_PART_LENGTH => {
                EMAIL_PATTERN.is_match(value)
            }
            _ => false,
        }
    }

    /// Returns the address as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A password that satisfies the strength rules.
///
/// This type only validates format. It holds the plaintext and performs no
/// hashing; callers must hash the value before it is persisted. It has no
/// `Serialize` impl and its `Debug` output is redacted so it cannot leak
/// through logs or payloads by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum length in bytes of the UTF-8 encoding.
    pub const MIN_LENGTH: usize = 8;

    /// Creates a password.
    ///
    /// Rules are checked in a fixed order and only the first violation is
    /// reported: length, uppercase, lowercase, digit, special character.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if let Some(violation) = Self::first_violation(&value) {
            return Err(violation.reject());
        }
        Ok(Self(value))
    }

    fn first_violation(value: &str) -> Option<ValidationError> {
        if value.len() < Self::MIN_LENGTH {
            return Some(ValidationError::PasswordTooShort {
                min_length: Self::MIN_LENGTH,
            });
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return Some(ValidationError::PasswordMissingUppercase);
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return Some(ValidationError::PasswordMissingLowercase);
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Some(ValidationError::PasswordMissingDigit);
        }
        if value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Some(ValidationError::PasswordMissingSpecialCharacter);
        }
        None
    }

    /// Returns the plaintext value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Password::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_addresses() {
        for raw in [
            "a@b.com",
            "first.last@example.co.uk",
            "user+tag@sub.example.org",
            "o'brien@example.ie",
            "x_y-z@my-domain.io",
        ] {
            let email = Email::new(raw).unwrap();
            assert_eq!(email.value(), raw);
            assert_eq!(email.to_string(), raw);
        }
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for raw in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "user name@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example-.com",
            "user@example..com",
        ] {
            assert_eq!(
                Email::new(raw),
                Err(ValidationError::InvalidEmail {
                    value: raw.to_string()
                }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_length_limits() {
        let local = "a".repeat(Email::MAX_LOCAL_PART_LENGTH + 1);
        assert!(Email::new(format!("{local}@example.com")).is_err());

        let label = "a".repeat(60);
        let long = format!("user@{label}.{label}.{label}.{label}.{label}.com");
        assert!(long.len() > Email::MAX_LENGTH);
        assert!(Email::new(long).is_err());
    }

    #[test]
    fn test_email_equality_by_value() {
        assert_eq!(Email::new("a@b.com").unwrap(), Email::new("a@b.com").unwrap());
        assert_ne!(Email::new("a@b.com").unwrap(), Email::new("A@b.com").unwrap());
    }

    #[test]
    fn test_email_deserialization_validates() {
        let email: Email = serde_json::from_str(r#""a@b.com""#).unwrap();
        assert_eq!(email.value(), "a@b.com");
        assert!(serde_json::from_str::<Email>(r#""nope""#).is_err());
    }

    #[test]
    fn test_password_accepts_strong_value() {
        let password = Password::new("Abcdef1!").unwrap();
        assert_eq!(password.value(), "Abcdef1!");
        assert_eq!(password.to_string(), "Abcdef1!");
    }

    #[test]
    fn test_password_reports_first_violation_in_order() {
        let cases = [
            ("Ab1!", ValidationError::PasswordTooShort { min_length: 8 }),
            ("ab", ValidationError::PasswordTooShort { min_length: 8 }),
            ("abcdefg1!", ValidationError::PasswordMissingUppercase),
            ("abcdefgh", ValidationError::PasswordMissingUppercase),
            ("ABCDEFG1!", ValidationError::PasswordMissingLowercase),
            ("ABCDEFGH", ValidationError::PasswordMissingLowercase),
            ("Abcdefgh!", ValidationError::PasswordMissingDigit),
            ("Abcdefgh", ValidationError::PasswordMissingDigit),
            ("Abcdefg1", ValidationError::PasswordMissingSpecialCharacter),
        ];

        for (raw, expected) in cases {
            assert_eq!(Password::new(raw), Err(expected), "{raw:?}");
        }
    }

    #[test]
    fn test_password_length_counts_bytes() {
        // Seven characters, eleven bytes.
        assert!(Password::new("Ab1!éé€").is_ok());
        // Five characters, six bytes.
        assert_eq!(
            Password::new("Ab1!é"),
            Err(ValidationError::PasswordTooShort { min_length: 8 })
        );
        // Non-ASCII letters count as special characters.
        assert!(Password::new("Abcdefg1é").is_ok());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("Abcdef1!").unwrap();
        let debug = format!("{password:?}");
        assert!(!debug.contains("Abcdef1!"));
    }
}
