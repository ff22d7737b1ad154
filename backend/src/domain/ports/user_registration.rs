//! Driving port for user registration and lookup.
//!
//! HTTP handlers depend on this port rather than on the repository, so the
//! registration rules live in one place and handlers stay testable with a
//! mock.

use async_trait::async_trait;

use crate::domain::{
    RegistrationOutcome, RegistrationRequest, User, UserId, UserResponse, UserServiceError,
};

use super::UserPersistenceError;

/// Domain use-case port for registering and reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Register a new user.
    ///
    /// Validation failures and duplicate emails are reported as
    /// [`RegistrationOutcome::Rejected`]; only storage failures are errors.
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, UserServiceError>;

    /// Fetch a user wrapped in the structured result envelope.
    async fn get_user(&self, id: &UserId) -> Result<UserResponse, UserServiceError>;

    /// Every registered user.
    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError>;
}
