//! Registered user record and its value types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RegistrationRequest;

/// Prefix shared by every member code.
pub const MEMBER_CODE_PREFIX: &str = "LBK";
/// Number of zero-padded digits following [`MEMBER_CODE_PREFIX`].
pub const MEMBER_CODE_DIGITS: usize = 6;

/// Validation errors returned when parsing user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Member code does not start with [`MEMBER_CODE_PREFIX`].
    #[error("member code must start with LBK")]
    MemberCodePrefix,
    /// Member code sequence is not a zero-padded number.
    #[error("member code must end with at least 6 digits")]
    MemberCodeSequence,
    /// Membership level is not one of the known tiers.
    #[error("unknown membership level: {0}")]
    UnknownMembershipLevel(String),
}

/// Internal user identifier.
///
/// Identifiers minted by the registration flow are UUID v4 strings. Lookups
/// accept any string, so an identifier taken from a request path is never
/// rejected before the store has been asked about it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// True when the identifier holds no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Human-readable member code, e.g. `LBK000001`.
///
/// # Examples
/// ```
/// use membership_backend::domain::MemberCode;
///
/// let code = MemberCode::from_sequence(1);
/// assert_eq!(code.as_ref(), "LBK000001");
/// assert_eq!(code.sequence(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberCode {
    raw: String,
    sequence: u64,
}

impl MemberCode {
    /// Format a member code for the given sequence number.
    pub fn from_sequence(sequence: u64) -> Self {
        Self {
            raw: format!("{MEMBER_CODE_PREFIX}{sequence:0width$}", width = MEMBER_CODE_DIGITS),
            sequence,
        }
    }

    /// Validate and parse a member code.
    pub fn new(code: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = code.into();
        let digits = raw
            .strip_prefix(MEMBER_CODE_PREFIX)
            .ok_or(UserValidationError::MemberCodePrefix)?;
        if digits.len() < MEMBER_CODE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(UserValidationError::MemberCodeSequence);
        }
        let sequence = digits
            .parse()
            .map_err(|_| UserValidationError::MemberCodeSequence)?;
        Ok(Self { raw, sequence })
    }

    /// Sequence number encoded in the code.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl AsRef<str> for MemberCode {
    fn as_ref(&self) -> &str {
        self.raw.as_str()
    }
}

impl fmt::Display for MemberCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MemberCode> for String {
    fn from(value: MemberCode) -> Self {
        value.raw
    }
}

impl TryFrom<String> for MemberCode {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MembershipLevel {
    /// Entry tier.
    Silver,
    /// Tier granted to every new registration.
    #[default]
    Gold,
    /// Highest tier.
    Platinum,
}

impl MembershipLevel {
    /// Display name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MembershipLevel {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Silver" => Ok(Self::Silver),
            "Gold" => Ok(Self::Gold),
            "Platinum" => Ok(Self::Platinum),
            other => Err(UserValidationError::UnknownMembershipLevel(other.to_owned())),
        }
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` and `member_id` are assigned once and never change.
/// - `registered_at` is set at creation.
///
/// Email uniqueness is checked by the registration flow only; it is not an
/// invariant of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    member_id: MemberCode,
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    membership_level: MembershipLevel,
    points: i64,
    registered_at: DateTime<Utc>,
}

impl User {
    /// Create a freshly registered user with the default tier and no points.
    pub fn new(
        id: UserId,
        member_id: MemberCode,
        request: RegistrationRequest,
        registered_at: DateTime<Utc>,
    ) -> Self {
        let RegistrationRequest {
            first_name,
            last_name,
            phone,
            email,
        } = request;
        Self {
            id,
            member_id,
            first_name,
            last_name,
            phone,
            email,
            membership_level: MembershipLevel::default(),
            points: 0,
            registered_at,
        }
    }

    /// Internal identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Member code assigned at registration.
    pub fn member_id(&self) -> &MemberCode {
        &self.member_id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given and family name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current membership tier.
    pub fn membership_level(&self) -> MembershipLevel {
        self.membership_level
    }

    /// Loyalty points balance.
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Registration timestamp.
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Replace the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replace the membership tier.
    #[must_use]
    pub fn with_membership_level(mut self, level: MembershipLevel) -> Self {
        self.membership_level = level;
        self
    }

    /// Replace the points balance.
    #[must_use]
    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }
}
