//! Registration and lookup use-cases over the user repository.
//!
//! The service owns the registration critical section: the duplicate email
//! check, member code assignment, and insert run under one async lock so
//! concurrent registrations cannot both claim an email or a member code.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{UserPersistenceError, UserRegistration, UserRepository};
use crate::domain::{
    CREATE_FAILED_MESSAGE, LOOKUP_FAILED_MESSAGE, MemberCode, RegistrationOutcome,
    RegistrationRejection, RegistrationRequest, USER_FOUND_MESSAGE, USER_NOT_FOUND_MESSAGE, User,
    UserId, UserResponse,
};

/// Hard failure from a user use-case.
///
/// Carries the structured failure envelope that callers return to clients
/// together with the repository error that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {source}", .response.message)]
pub struct UserServiceError {
    response: UserResponse,
    #[source]
    source: UserPersistenceError,
}

impl UserServiceError {
    /// Wrap a repository error with the client-facing failure message.
    pub fn new(message: impl Into<String>, source: UserPersistenceError) -> Self {
        Self {
            response: UserResponse::failure(message),
            source,
        }
    }

    /// Structured failure envelope.
    pub fn response(&self) -> &UserResponse {
        &self.response
    }

    /// Consume the error, keeping only the envelope.
    pub fn into_response(self) -> UserResponse {
        self.response
    }

    /// Underlying repository error.
    pub fn persistence(&self) -> &UserPersistenceError {
        &self.source
    }

    /// True when the underlying repository error is a missing record.
    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }
}

/// User use-case service implementing [`UserRegistration`].
pub struct UserService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    registration_gate: Arc<Mutex<()>>,
}

// Clones share the store and the registration gate.
impl<R> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            clock: Arc::clone(&self.clock),
            registration_gate: Arc::clone(&self.registration_gate),
        }
    }
}

impl<R> UserService<R> {
    /// Create a service over `repo`, stamping registrations with `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use membership_backend::domain::UserService;
    /// # use membership_backend::outbound::memory::InMemoryUserRepository;
    /// # use mockable::DefaultClock;
    /// let service = UserService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            registration_gate: Arc::new(Mutex::new(())),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Register a user, assigning an identifier and the next member code.
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, UserServiceError> {
        if let Err(rejection) = request.validate() {
            debug!(reason = rejection.code(), %rejection, "registration rejected");
            return Ok(RegistrationOutcome::Rejected(rejection));
        }

        let _gate = self.registration_gate.lock().await;

        match self.repo.find_by_email(&request.email).await {
            Ok(existing) => {
                warn!(user_id = %existing.id(), "registration rejected: email already registered");
                return Ok(RegistrationOutcome::Rejected(
                    RegistrationRejection::EmailTaken,
                ));
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(Self::create_failed(err)),
        }

        let member_id = self
            .next_member_code()
            .await
            .map_err(Self::create_failed)?;
        let user = User::new(UserId::random(), member_id, request, self.clock.utc());
        self.repo
            .create(&user)
            .await
            .map_err(Self::create_failed)?;

        info!(
            user_id = %user.id(),
            member_id = %user.member_id(),
            "user registered"
        );
        Ok(RegistrationOutcome::Registered(user))
    }

    /// Fetch a user wrapped in the result envelope.
    pub async fn get_user(&self, id: &UserId) -> Result<UserResponse, UserServiceError> {
        match self.repo.find_by_id(id).await {
            Ok(user) => Ok(UserResponse::success(USER_FOUND_MESSAGE, user)),
            Err(err) if err.is_not_found() => {
                debug!(user_id = %id, "user lookup missed");
                Err(UserServiceError::new(USER_NOT_FOUND_MESSAGE, err))
            }
            Err(err) => {
                error!(user_id = %id, error = %err, "user lookup failed");
                Err(UserServiceError::new(LOOKUP_FAILED_MESSAGE, err))
            }
        }
    }

    /// Every stored user in registration order.
    pub async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.repo.list().await
    }

    /// Next free member code: one past the store size, skipping codes
    /// already held after deletions.
    async fn next_member_code(&self) -> Result<MemberCode, UserPersistenceError> {
        let count = self.repo.count().await?;
        let mut sequence = u64::try_from(count)
            .map_err(|_| UserPersistenceError::storage("user count exceeds member code range"))?
            + 1;

        let users = self.repo.list().await?;
        let taken: HashSet<&str> = users
            .iter()
            .map(|user| user.member_id().as_ref())
            .collect();
        while taken.contains(MemberCode::from_sequence(sequence).as_ref()) {
            sequence += 1;
        }
        Ok(MemberCode::from_sequence(sequence))
    }

    fn create_failed(err: UserPersistenceError) -> UserServiceError {
        error!(error = %err, "user registration failed");
        UserServiceError::new(CREATE_FAILED_MESSAGE, err)
    }
}

#[async_trait]
impl<R> UserRegistration for UserService<R>
where
    R: UserRepository,
{
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, UserServiceError> {
        UserService::register(self, request).await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserResponse, UserServiceError> {
        UserService::get_user(self, id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        UserService::list_users(self).await
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
