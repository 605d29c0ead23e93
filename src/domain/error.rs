use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Hash error: {message}")]
    Hash { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn hash(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The message carried by the error, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::InvalidRequest { message }
            | Self::Conflict { message }
            | Self::NotFound { message }
            | Self::Hash { message }
            | Self::Storage { message }
            | Self::Configuration { message }
            | Self::Internal { message } => message,
        }
    }

    /// Prefix the message with the failing operation, keeping the error kind
    pub fn context(self, operation: &str) -> Self {
        let annotate = |message: String| format!("{}: {}", operation, message);

        match self {
            Self::Validation { message } => Self::validation(annotate(message)),
            Self::InvalidRequest { message } => Self::invalid_request(annotate(message)),
            Self::Conflict { message } => Self::conflict(annotate(message)),
            Self::NotFound { message } => Self::not_found(annotate(message)),
            Self::Hash { message } => Self::hash(annotate(message)),
            Self::Storage { message } => Self::storage(annotate(message)),
            Self::Configuration { message } => Self::configuration(annotate(message)),
            Self::Internal { message } => Self::internal(annotate(message)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("no user exists with ID \"7\"");
        assert_eq!(error.to_string(), "Not found: no user exists with ID \"7\"");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("username is required");
        assert_eq!(error.to_string(), "Validation error: username is required");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("user already exists with that email");
        assert_eq!(
            error.to_string(),
            "Conflict: user already exists with that email"
        );
    }

    #[test]
    fn test_context_keeps_kind() {
        let error = DomainError::storage("connection reset").context("user.register");

        assert!(matches!(error, DomainError::Storage { .. }));
        assert_eq!(error.message(), "user.register: connection reset");
    }

    #[test]
    fn test_context_nests() {
        let error = DomainError::not_found("missing")
            .context("repository.get_by_id")
            .context("user.get_by_id");

        assert!(error.is_not_found());
        assert_eq!(
            error.message(),
            "user.get_by_id: repository.get_by_id: missing"
        );
    }
}
