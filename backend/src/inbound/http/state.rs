//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProfileCommand, ProfileQuery, UserRegistration};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRegistration>,
    pub profile: Arc<dyn ProfileQuery>,
    pub profile_command: Arc<dyn ProfileCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use membership_backend::domain::{ProfileService, UserService};
    /// use membership_backend::inbound::http::state::HttpState;
    /// use membership_backend::outbound::memory::InMemoryUserRepository;
    /// use mockable::DefaultClock;
    ///
    /// let users = UserService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let profile = Arc::new(ProfileService::default());
    /// let state = HttpState::new(Arc::new(users), profile.clone(), profile);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UserRegistration>,
        profile: Arc<dyn ProfileQuery>,
        profile_command: Arc<dyn ProfileCommand>,
    ) -> Self {
        Self {
            users,
            profile,
            profile_command,
        }
    }
}
