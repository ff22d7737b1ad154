//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid request format")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::MembershipLevel`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MembershipLevel)]
pub enum MembershipLevelSchema {
    /// Entry tier.
    Silver,
    /// Tier granted on registration.
    Gold,
    /// Highest tier.
    Platinum,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Registered member with internal identifier and member code.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Internal identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Human-readable member code.
    #[schema(example = "LBK000001")]
    member_id: String,
    /// Given name.
    #[schema(example = "John")]
    first_name: String,
    /// Family name.
    #[schema(example = "Doe")]
    last_name: String,
    /// Contact phone number.
    #[schema(example = "081-234-5678")]
    phone: String,
    /// Contact email.
    #[schema(example = "john@example.com")]
    email: String,
    /// Membership tier.
    membership_level: MembershipLevelSchema,
    /// Loyalty points balance.
    #[schema(example = 0)]
    points: i64,
    /// Registration timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    registered_at: String,
}

/// OpenAPI schema for [`crate::domain::UserResponse`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserResponseSchema {
    /// Whether the operation succeeded.
    success: bool,
    /// Human-readable outcome.
    #[schema(example = "User registered successfully")]
    message: String,
    /// Affected user, omitted on failure.
    user: Option<UserSchema>,
}

/// OpenAPI schema for [`crate::domain::Profile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Profile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProfileSchema {
    /// Membership tier label.
    #[schema(example = "Gold")]
    membership_level: String,
    /// Member code as displayed.
    #[schema(example = "LBK001234")]
    membership_code: String,
    /// Given name.
    first_name: String,
    /// Family name.
    last_name: String,
    /// Contact phone number.
    phone: String,
    /// Contact email.
    email: String,
    /// Date the member joined.
    #[schema(value_type = String, format = Date, example = "2023-06-15")]
    joined_date: String,
    /// Loyalty points balance.
    #[schema(example = 15420)]
    points: i64,
}

/// OpenAPI schema for [`crate::domain::ProfilePatch`].
///
/// Every field is optional; empty strings and zero points are ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::ProfilePatch)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProfilePatchSchema {
    /// Tier label; any non-empty text is stored.
    #[schema(example = "Platinum")]
    membership_level: Option<String>,
    /// Member code.
    membership_code: Option<String>,
    /// Given name.
    first_name: Option<String>,
    /// Family name.
    last_name: Option<String>,
    /// Contact phone number.
    phone: Option<String>,
    /// Contact email.
    email: Option<String>,
    /// ISO calendar date.
    #[schema(format = Date, example = "2023-06-15")]
    joined_date: Option<String>,
    /// Loyalty points balance.
    points: Option<i64>,
}
