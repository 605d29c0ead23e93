//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("username is required")]
    EmptyUsername,

    #[error("email is required")]
    EmptyEmail,

    #[error("email is malformed")]
    MalformedEmail,

    #[error("password is required")]
    EmptyPassword,

    #[error("password hash is required")]
    EmptyPasswordHash,

    #[error("password must be at least {0} character(s) long")]
    PasswordTooShort(usize),

    #[error("password is missing lower case letter (a-z)")]
    MissingLowerCase,

    #[error("password is missing upper case letter (A-Z)")]
    MissingUpperCase,

    #[error("password is missing digit (0-9)")]
    MissingDigit,

    #[error("password is missing special character")]
    MissingSpecialCharacter,
}

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Local part: runs of alphanumerics where every `.`, `-` or `_` sits between
/// two alphanumerics. Domain: one or more `label.` groups then a 2-4 letter TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9]|[a-zA-Z0-9][_.\-][a-zA-Z0-9])+@([a-zA-Z0-9\-]+\.)+[a-zA-Z]{2,4}$")
        .unwrap()
});

/// Validate a username
///
/// Rules:
/// - Cannot be empty
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be empty
/// - Separators in the local part must be flanked by letters or numbers
/// - Domain labels separated by single dots, alphabetic TLD of 2-4 letters
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::MalformedEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Cannot be empty
/// - Minimum 8 characters
/// - At least one lower case letter, one upper case letter, one digit and
///   one of `!@#$%^&*`
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(UserValidationError::MissingLowerCase);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(UserValidationError::MissingUpperCase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(UserValidationError::MissingDigit);
    }

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(UserValidationError::MissingSpecialCharacter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Username tests
    #[test]
    fn test_empty_username() {
        assert_eq!(
            validate_username(""),
            Err(UserValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_valid_username() {
        assert!(validate_username("Moose").is_ok());
        assert!(validate_username("m").is_ok());
    }

    // Email tests
    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_valid_emails() {
        let valid = [
            "abc-d@mail.com",
            "abc.def@mail.com",
            "abc@mail.com",
            "abc_def@mail.com",
            "123-d@mail.com",
            "123.456@mail.com",
            "123@mail.com",
            "123_456@mail.com",
            "abc.def@mail.cc",
            "abc.def@mail-archive.com",
            "abc.def@mail.org",
            "abc.def@123.com",
            "abc.def@123-456.com",
            "moose@stmoosersburg.com",
        ];

        for email in valid {
            assert!(validate_email(email).is_ok(), "expected '{}' to be valid", email);
        }
    }

    #[test]
    fn test_malformed_emails() {
        let invalid = [
            "abc-@mail.com",
            "abc..def@mail.com",
            ".abc@mail.com",
            "-abc@mail.com",
            "abc#def@mail.com",
            "abc.def@mail.c",
            "abc.def@mail#archive.com",
            "abc.def@mail",
            "abc.def@mail..com",
            "abc@[192.168.0.1]",
            "abc@mail.123",
            "abc@mail.technology",
        ];

        for email in invalid {
            assert_eq!(
                validate_email(email),
                Err(UserValidationError::MalformedEmail),
                "expected '{}' to be malformed",
                email
            );
        }
    }

    // Password tests
    #[test]
    fn test_valid_password() {
        assert!(validate_password("P@ssw0rd").is_ok());
        assert!(validate_password("Correct-Horse-8attery!").is_ok());
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("Short1!"),
            Err(UserValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password("To0b@d"),
            Err(UserValidationError::PasswordTooShort(8))
        );
    }

    #[test]
    fn test_password_missing_lower_case() {
        assert_eq!(
            validate_password("NOLOWERCASE@1"),
            Err(UserValidationError::MissingLowerCase)
        );
    }

    #[test]
    fn test_password_missing_upper_case() {
        assert_eq!(
            validate_password("nouppercase@1"),
            Err(UserValidationError::MissingUpperCase)
        );
        assert_eq!(
            validate_password("password"),
            Err(UserValidationError::MissingUpperCase)
        );
    }

    #[test]
    fn test_password_missing_digit() {
        assert_eq!(
            validate_password("Nodigit@all"),
            Err(UserValidationError::MissingDigit)
        );
    }

    #[test]
    fn test_password_missing_special_character() {
        assert_eq!(
            validate_password("Nospecialcharacter1"),
            Err(UserValidationError::MissingSpecialCharacter)
        );
        // Characters outside the fixed set do not count
        assert_eq!(
            validate_password("Tilde~Only1"),
            Err(UserValidationError::MissingSpecialCharacter)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UserValidationError::PasswordTooShort(8).to_string(),
            "password must be at least 8 character(s) long"
        );
        assert_eq!(
            UserValidationError::MissingSpecialCharacter.to_string(),
            "password is missing special character"
        );
    }
}
