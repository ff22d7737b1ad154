//! Profile cell implementing the profile driving ports.

use std::sync::RwLock;

use tracing::{debug, info};

use crate::domain::ports::{ProfileCommand, ProfileQuery};
use crate::domain::{Error, Profile, ProfilePatch};

/// Owns the single in-memory profile.
///
/// Reads clone the profile out under a shared lock; updates validate and
/// write under the exclusive lock, so readers never observe a half-applied
/// patch.
#[derive(Debug, Default)]
pub struct ProfileService {
    profile: RwLock<Profile>,
}

impl ProfileService {
    /// Create a cell holding `profile`.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }

    fn poisoned() -> Error {
        Error::internal("profile lock poisoned")
    }
}

impl ProfileQuery for ProfileService {
    fn profile(&self) -> Result<Profile, Error> {
        let guard = self.profile.read().map_err(|_| Self::poisoned())?;
        Ok(guard.clone())
    }
}

impl ProfileCommand for ProfileService {
    fn update_profile(&self, patch: ProfilePatch) -> Result<Profile, Error> {
        let mut guard = self.profile.write().map_err(|_| Self::poisoned())?;
        guard.apply(patch).map_err(|err| {
            debug!(error = %err, "profile update rejected");
            Error::invalid_request(err.to_string())
        })?;
        info!(membership_code = %guard.membership_code(), "profile updated");
        Ok(guard.clone())
    }
}
