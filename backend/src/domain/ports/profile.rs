//! Driving ports for the membership profile.
//!
//! The profile lives in memory and every operation completes without I/O, so
//! these ports are synchronous.

use crate::domain::{Error, Profile, ProfilePatch};

/// Read access to the profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileQuery: Send + Sync {
    /// Snapshot of the current profile.
    fn profile(&self) -> Result<Profile, Error>;
}

/// Write access to the profile.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileCommand: Send + Sync {
    /// Apply a partial update and return the resulting profile.
    fn update_profile(&self, patch: ProfilePatch) -> Result<Profile, Error>;
}
