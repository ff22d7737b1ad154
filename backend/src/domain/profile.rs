//! Membership profile shown on the profile screen, and partial updates to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{MemberCode, MembershipLevel};

/// Date format accepted for `joined_date`.
pub const JOINED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors raised while applying a [`ProfilePatch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    /// `joined_date` is not an ISO calendar date.
    #[error("joined_date must be an ISO date (YYYY-MM-DD), got {0:?}")]
    JoinedDate(String),
}

/// Membership profile.
///
/// Tier and code are display strings here, not the typed values registered
/// users carry, so any non-empty text can be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    membership_level: String,
    membership_code: String,
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    joined_date: NaiveDate,
    points: i64,
}

impl Default for Profile {
    /// Demo member the service starts with.
    fn default() -> Self {
        Self {
            membership_level: MembershipLevel::Gold.as_str().to_owned(),
            membership_code: MemberCode::from_sequence(1234).into(),
            first_name: "สมชาย".to_owned(),
            last_name: "ใจดี".to_owned(),
            phone: "081-234-5678".to_owned(),
            email: "somchai@example.com".to_owned(),
            joined_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or_default(),
            points: 15_420,
        }
    }
}

impl Profile {
    /// Membership tier label.
    pub fn membership_level(&self) -> &str {
        &self.membership_level
    }

    /// Member code as displayed.
    pub fn membership_code(&self) -> &str {
        &self.membership_code
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date the member joined.
    pub fn joined_date(&self) -> NaiveDate {
        self.joined_date
    }

    /// Loyalty points balance.
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Apply `patch`, leaving the profile untouched when any field is invalid.
    ///
    /// # Examples
    /// ```
    /// use membership_backend::domain::{Profile, ProfilePatch};
    ///
    /// let mut profile = Profile::default();
    /// profile
    ///     .apply(ProfilePatch {
    ///         first_name: Some("Ada".into()),
    ///         points: Some(0),
    ///         ..ProfilePatch::default()
    ///     })
    ///     .expect("valid patch");
    /// assert_eq!(profile.first_name(), "Ada");
    /// assert_eq!(profile.points(), 15_420);
    /// ```
    pub fn apply(&mut self, patch: ProfilePatch) -> Result<(), ProfileValidationError> {
        let ProfilePatch {
            membership_level,
            membership_code,
            first_name,
            last_name,
            phone,
            email,
            joined_date,
            points,
        } = patch;

        let joined_date = set(joined_date)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, JOINED_DATE_FORMAT)
                    .map_err(|_| ProfileValidationError::JoinedDate(raw))
            })
            .transpose()?;

        if let Some(value) = set(membership_level) {
            self.membership_level = value;
        }
        if let Some(value) = set(membership_code) {
            self.membership_code = value;
        }
        if let Some(value) = set(first_name) {
            self.first_name = value;
        }
        if let Some(value) = set(last_name) {
            self.last_name = value;
        }
        if let Some(value) = set(phone) {
            self.phone = value;
        }
        if let Some(value) = set(email) {
            self.email = value;
        }
        if let Some(date) = joined_date {
            self.joined_date = date;
        }
        if let Some(value) = points.filter(|points| *points != 0) {
            self.points = value;
        }
        Ok(())
    }
}

/// Partial profile update.
///
/// Absent fields, empty strings, and zero points all leave the current value
/// in place, so zero points cannot be written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    /// Tier label, such as `Gold`.
    pub membership_level: Option<String>,
    /// Member code such as `LBK001234`.
    pub membership_code: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// ISO calendar date.
    pub joined_date: Option<String>,
    /// Loyalty points balance.
    pub points: Option<i64>,
}

fn set(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
