//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The record cannot be stored as given.
        InvalidInput { message: String } => "invalid user record: {message}",
        /// No record matched the lookup key.
        NotFound { key: String } => "user not found: {key}",
        /// The backing store failed unexpectedly.
        Storage { message: String } => "user store failed: {message}",
    }
}

/// Canonical store of user records keyed by identifier.
///
/// Implementations synchronise internally; callers never hold a lock across
/// calls. Listing and email lookups follow insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a record, silently replacing any record with the same id.
    ///
    /// Fails with [`UserPersistenceError::InvalidInput`] when the id is empty.
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserPersistenceError>;

    /// Fetch the first record, in insertion order, holding `email`.
    async fn find_by_email(&self, email: &str) -> Result<User, UserPersistenceError>;

    /// Every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, UserPersistenceError>;

    /// Replace an existing record.
    ///
    /// Fails with [`UserPersistenceError::InvalidInput`] when the id is empty
    /// and [`UserPersistenceError::NotFound`] when no record holds it.
    async fn update(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Remove a record.
    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}
