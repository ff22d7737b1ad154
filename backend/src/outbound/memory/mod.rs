//! In-memory user repository.
//!
//! Records live for the lifetime of the process. Each call takes the lock
//! for its own duration only and never holds it across an `.await`.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

#[derive(Debug, Default)]
struct Records {
    order: Vec<UserId>,
    by_id: HashMap<UserId, User>,
}

impl Records {
    fn ordered(&self) -> impl Iterator<Item = &User> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}

/// Insertion-ordered user store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Records>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, UserPersistenceError> {
        self.records
            .read()
            .map_err(|_| UserPersistenceError::storage("user store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, UserPersistenceError> {
        self.records
            .write()
            .map_err(|_| UserPersistenceError::storage("user store lock poisoned"))
    }

    fn require_id(id: &UserId) -> Result<(), UserPersistenceError> {
        if id.is_empty() {
            return Err(UserPersistenceError::invalid_input("user id must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        Self::require_id(user.id())?;
        let mut records = self.write()?;
        let id = user.id().clone();
        if records.by_id.insert(id.clone(), user.clone()).is_none() {
            records.order.push(id);
        } else {
            debug!(user_id = %user.id(), "replaced existing user record");
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserPersistenceError> {
        self.read()?
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| UserPersistenceError::not_found(id.as_ref()))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserPersistenceError> {
        self.read()?
            .ordered()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or_else(|| UserPersistenceError::not_found(email))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.read()?.ordered().cloned().collect())
    }

    async fn count(&self) -> Result<usize, UserPersistenceError> {
        Ok(self.read()?.by_id.len())
    }

    async fn update(&self, user: &User) -> Result<(), UserPersistenceError> {
        Self::require_id(user.id())?;
        let mut records = self.write()?;
        let slot = records
            .by_id
            .get_mut(user.id())
            .ok_or_else(|| UserPersistenceError::not_found(user.id().as_ref()))?;
        *slot = user.clone();
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        let mut records = self.write()?;
        if records.by_id.remove(id).is_none() {
            return Err(UserPersistenceError::not_found(id.as_ref()));
        }
        records.order.retain(|stored| stored != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
