//! Registration request, rejection reasons, and the structured result
//! envelope returned by the user use-cases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Message attached to a successful registration.
pub const REGISTERED_MESSAGE: &str = "User registered successfully";
/// Message attached to a successful lookup.
pub const USER_FOUND_MESSAGE: &str = "User found";
/// Message attached to a lookup for an unknown identifier.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
/// Message attached to a registration whose email is already on file.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";
/// Message attached to a registration the store refused to persist.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create user";
/// Message attached to a lookup the store failed to serve.
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to retrieve user";

/// Fields a registration must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact phone number.
    Phone,
    /// Contact email.
    Email,
}

impl RegistrationField {
    /// Validation order; the first missing field is the one reported.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Phone, Self::Email];

    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone number",
            Self::Email => "email",
        }
    }
}

/// New-user registration input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

impl RegistrationRequest {
    fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
        }
    }

    /// Check that every required field is present.
    ///
    /// Only empty strings count as missing. Values are stored as given, so
    /// whitespace passes.
    ///
    /// # Examples
    /// ```
    /// use membership_backend::domain::{RegistrationField, RegistrationRejection, RegistrationRequest};
    ///
    /// let request = RegistrationRequest {
    ///     first_name: "John".into(),
    ///     ..RegistrationRequest::default()
    /// };
    /// assert_eq!(
    ///     request.validate(),
    ///     Err(RegistrationRejection::MissingField(RegistrationField::LastName))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RegistrationRejection> {
        match RegistrationField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            Some(field) => Err(RegistrationRejection::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Expected business reasons for turning a registration away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRejection {
    /// A required field was empty.
    MissingField(RegistrationField),
    /// Another user already registered this email.
    EmailTaken,
}

impl RegistrationRejection {
    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::EmailTaken => "email_taken",
        }
    }

    /// Human-readable message returned to clients.
    pub fn message(self) -> String {
        match self {
            Self::MissingField(field) => format!("{} is required", field.label()),
            Self::EmailTaken => EMAIL_TAKEN_MESSAGE.to_owned(),
        }
    }
}

impl fmt::Display for RegistrationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of a registration attempt that did not hit a storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The user was stored.
    Registered(User),
    /// The request was turned away; nothing was stored.
    Rejected(RegistrationRejection),
}

impl RegistrationOutcome {
    /// Registered user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Registered(user) => Some(user),
            Self::Rejected(_) => None,
        }
    }
}

impl From<RegistrationOutcome> for UserResponse {
    fn from(value: RegistrationOutcome) -> Self {
        match value {
            RegistrationOutcome::Registered(user) => Self::success(REGISTERED_MESSAGE, user),
            RegistrationOutcome::Rejected(rejection) => Self::failure(rejection.message()),
        }
    }
}

/// Structured result: success flag, message, and the optional user payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Affected user, omitted on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl UserResponse {
    /// Successful outcome carrying a user.
    pub fn success(message: impl Into<String>, user: User) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: Some(user),
        }
    }

    /// Failed outcome without payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}
