//! User service for registration and lookup

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_password, validate_username, User, UserId, UserRepository,
};
use crate::domain::DomainError;

use super::hash_service::HashService;

/// User service for registration and lookup
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hash_service: Arc<HashService>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, hash_service: Arc<HashService>) -> Self {
        Self {
            repository,
            hash_service,
        }
    }

    pub fn builder() -> UserServiceBuilder {
        UserServiceBuilder::new()
    }

    /// Register a new user
    ///
    /// Validates the input, refuses an email that is already taken, hashes the
    /// password and stores the user. The first failing step wins.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        self.register_inner(username, email, password)
            .await
            .map_err(|e| e.context("user.register"))
    }

    async fn register_inner(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        validate_username(username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        // Not atomic with the create below; the postgres schema enforces uniqueness
        match self.repository.get_by_email(email).await {
            Ok(_) => {
                debug!("Registration refused, email already taken");
                return Err(DomainError::conflict("user already exists with that email"));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let password_hash = self.hash_service.generate_from_password(password)?;

        let user = self
            .repository
            .create(username, email, &password_hash)
            .await?;

        info!(user_id = %user.id(), "User registered");

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: &str) -> Result<User, DomainError> {
        self.repository
            .get_by_id(&UserId::new(id))
            .await
            .map_err(|e| e.context("user.get_by_id"))
    }

    /// Get a user by email address
    pub async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.repository
            .get_by_email(email)
            .await
            .map_err(|e| e.context("user.get_by_email"))
    }
}

/// Builder for UserService
#[derive(Debug, Default)]
pub struct UserServiceBuilder {
    repository: Option<Arc<dyn UserRepository>>,
    hash_service: Option<Arc<HashService>>,
}

impl UserServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_hash_service(mut self, hash_service: Arc<HashService>) -> Self {
        self.hash_service = Some(hash_service);
        self
    }

    /// Build the service, failing when a dependency was not supplied
    pub fn build(self) -> Result<UserService, DomainError> {
        let repository = self
            .repository
            .ok_or_else(|| DomainError::configuration("user service requires a repository"))?;
        let hash_service = self
            .hash_service
            .ok_or_else(|| DomainError::configuration("user service requires a hash service"))?;

        Ok(UserService::new(repository, hash_service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::password::{BcryptHasher, HashError, MockPasswordHasher};
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    const USERNAME: &str = "Moose";
    const EMAIL: &str = "moose@stmoosersburg.com";
    const PASSWORD: &str = "P@ssw0rd";

    fn hash_service() -> Arc<HashService> {
        Arc::new(HashService::new(Arc::new(BcryptHasher::with_cost(4))))
    }

    fn create_service() -> UserService {
        UserService::builder()
            .with_repository(Arc::new(InMemoryUserRepository::new()))
            .with_hash_service(hash_service())
            .build()
            .unwrap()
    }

    fn service_with_repository(repository: MockUserRepository) -> UserService {
        UserService::new(Arc::new(repository), hash_service())
    }

    fn assert_validation(result: Result<User, DomainError>, expected: &str) {
        match result {
            Err(DomainError::Validation { message }) => {
                assert_eq!(message, format!("user.register: {}", expected))
            }
            other => panic!("expected validation error '{}', got {:?}", expected, other),
        }
    }

    #[test]
    fn test_builder_requires_dependencies() {
        let missing_repository = UserService::builder()
            .with_hash_service(hash_service())
            .build();
        assert!(matches!(
            missing_repository,
            Err(DomainError::Configuration { .. })
        ));

        let missing_hash_service = UserService::builder()
            .with_repository(Arc::new(InMemoryUserRepository::new()))
            .build();
        assert!(matches!(
            missing_hash_service,
            Err(DomainError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        let user = service.register(USERNAME, EMAIL, PASSWORD).await.unwrap();

        assert!(!user.id().as_str().is_empty());
        assert_eq!(user.username(), USERNAME);
        assert_eq!(user.email(), EMAIL);
        assert!(!user.password_hash().is_empty());
        assert_ne!(user.password_hash(), PASSWORD);
        assert!(service.hash_service.match_password(user.password_hash(), PASSWORD));
    }

    #[tokio::test]
    async fn test_register_then_lookup() {
        let service = create_service();

        let user = service.register(USERNAME, EMAIL, PASSWORD).await.unwrap();

        let by_id = service.get_by_id(user.id().as_str()).await.unwrap();
        assert_eq!(by_id, user);

        let by_email = service.get_by_email(EMAIL).await.unwrap();
        assert_eq!(by_email, user);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        let first = service.register(USERNAME, EMAIL, PASSWORD).await.unwrap();
        let result = service.register("Other", EMAIL, "An0ther!pass").await;

        assert_eq!(
            result,
            Err(DomainError::conflict(
                "user.register: user already exists with that email"
            ))
        );

        let stored = service.get_by_email(EMAIL).await.unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn test_register_validation_order() {
        let service = create_service();

        assert_validation(
            service.register("", "", "").await,
            "username is required",
        );
        assert_validation(
            service.register(USERNAME, "", "").await,
            "email is required",
        );
        assert_validation(
            service.register(USERNAME, "abc..def@mail.com", PASSWORD).await,
            "email is malformed",
        );
        assert_validation(
            service.register(USERNAME, EMAIL, "").await,
            "password is required",
        );
        assert_validation(
            service.register(USERNAME, EMAIL, "Short1!").await,
            "password must be at least 8 character(s) long",
        );
        assert_validation(
            service.register(USERNAME, EMAIL, "password").await,
            "password is missing upper case letter (A-Z)",
        );
        assert_validation(
            service.register(USERNAME, EMAIL, "Nospecialcharacter1").await,
            "password is missing special character",
        );
    }

    #[tokio::test]
    async fn test_validation_failure_never_touches_repository() {
        // No expectations set, any repository call panics
        let service = service_with_repository(MockUserRepository::new());

        let result = service.register(USERNAME, EMAIL, "weak").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_propagates_lookup_failure() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .times(1)
            .returning(|_| Err(DomainError::storage("connection refused")));
        repository.expect_create().never();

        let service = service_with_repository(repository);
        let result = service.register(USERNAME, EMAIL, PASSWORD).await;

        assert_eq!(
            result,
            Err(DomainError::storage("user.register: connection refused"))
        );
    }

    #[tokio::test]
    async fn test_register_propagates_create_failure() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(|email| Err(DomainError::not_found(format!("no user {}", email))));
        repository
            .expect_create()
            .times(1)
            .returning(|_, _, _| Err(DomainError::storage("disk full")));

        let service = service_with_repository(repository);
        let result = service.register(USERNAME, EMAIL, PASSWORD).await;

        assert_eq!(result, Err(DomainError::storage("user.register: disk full")));
    }

    #[tokio::test]
    async fn test_register_propagates_hash_failure() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(|_| Err(DomainError::not_found("missing")));
        repository.expect_create().never();

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_from_password()
            .returning(|_| Err(HashError::Generation("broken".to_string())));

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(HashService::new(Arc::new(hasher))),
        );

        let result = service.register(USERNAME, EMAIL, PASSWORD).await;
        assert!(matches!(result, Err(DomainError::Hash { .. })));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(|_| Err(DomainError::not_found("missing")));
        repository
            .expect_create()
            .withf(|username, email, hash| {
                username == USERNAME && email == EMAIL && hash != PASSWORD && !hash.is_empty()
            })
            .times(1)
            .returning(|username, email, hash| {
                Ok(User::new(UserId::new("1"), username, email, hash))
            });

        let service = service_with_repository(repository);
        let user = service.register(USERNAME, EMAIL, PASSWORD).await.unwrap();

        assert_eq!(user.id().as_str(), "1");
    }

    #[tokio::test]
    async fn test_lookups_on_empty_repository() {
        let service = create_service();

        let by_id = service.get_by_id("0").await;
        assert_eq!(
            by_id,
            Err(DomainError::not_found(
                "user.get_by_id: no user exists with ID \"0\""
            ))
        );

        let by_email = service.get_by_email(EMAIL).await;
        assert!(matches!(by_email, Err(DomainError::NotFound { .. })));
    }
}
