//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use membership_backend::domain::Profile;
use mockable::{Clock, DefaultClock};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) profile: Profile,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with the system clock
    /// and the default profile.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            clock: Arc::new(DefaultClock),
            profile: Profile::default(),
        }
    }

    /// Replace the clock used to stamp registrations.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by bootstrap tests to pin timestamps")
    )]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the profile the server starts with.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by bootstrap tests to seed a profile")
    )]
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
