//! User entity and related types

use serde::Serialize;

use super::validation::UserValidationError;

/// User identifier assigned by the repository on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered user account
///
/// Only the repository creates users, so a `User` always carries the hash
/// produced at registration and never the plaintext password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    /// Password hash - never exposed in serialization or formatting
    #[serde(skip_serializing)]
    password_hash: String,
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Check structural completeness; format rules live in the user service
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        if self.email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }

        if self.password_hash.is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }

        Ok(())
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User {{ id: {}, username: {}, email: {} }}",
            self.id, self.username, self.email
        )
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "a.terrible.hash.never.to.be.used";

    fn create_test_user() -> User {
        User::new(
            UserId::new("a.very.special.moose"),
            "Moose",
            "moose@stmoosersburg.com",
            HASH,
        )
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user();

        assert_eq!(user.id().as_str(), "a.very.special.moose");
        assert_eq!(user.username(), "Moose");
        assert_eq!(user.email(), "moose@stmoosersburg.com");
        assert_eq!(user.password_hash(), HASH);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_username() {
        let user = User::new(UserId::new("1"), "", "moose@stmoosersburg.com", HASH);
        assert_eq!(user.validate(), Err(UserValidationError::EmptyUsername));
    }

    #[test]
    fn test_validate_missing_email() {
        let user = User::new(UserId::new("1"), "Moose", "", HASH);
        assert_eq!(user.validate(), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_validate_missing_password_hash() {
        let user = User::new(UserId::new("1"), "Moose", "moose@stmoosersburg.com", "");
        assert_eq!(user.validate(), Err(UserValidationError::EmptyPasswordHash));
    }

    #[test]
    fn test_display_never_prints_password_hash() {
        let user = create_test_user();
        let rendered = user.to_string();

        assert_eq!(
            rendered,
            "User { id: a.very.special.moose, username: Moose, email: moose@stmoosersburg.com }"
        );
        assert!(!rendered.contains(HASH));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = create_test_user();
        let rendered = format!("{:?}", user);

        assert!(!rendered.contains(HASH));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_serialization_excludes_password_hash() {
        let user = create_test_user();
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains(HASH));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"id\":\"a.very.special.moose\""));
    }
}
