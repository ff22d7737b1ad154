//! Domain primitives, aggregates, and use-case services.
//!
//! Purpose: define strongly typed membership entities and the services that
//! implement the driving ports. Types here know nothing about HTTP; inbound
//! adapters translate them into transport payloads.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error envelope.
//! - `User`, `UserId`, `MemberCode`, `MembershipLevel`: registered members.
//! - `RegistrationRequest`, `RegistrationOutcome`, `UserResponse`: the
//!   registration workflow and its structured result.
//! - `Profile`, `ProfilePatch`: the single membership profile.
//! - `UserService`, `ProfileService`: port implementations.

pub mod error;
pub mod ports;
pub mod profile;
pub mod profile_service;
pub mod registration;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::profile::{JOINED_DATE_FORMAT, Profile, ProfilePatch, ProfileValidationError};
pub use self::profile_service::ProfileService;
pub use self::registration::{
    CREATE_FAILED_MESSAGE, EMAIL_TAKEN_MESSAGE, LOOKUP_FAILED_MESSAGE, REGISTERED_MESSAGE,
    RegistrationField, RegistrationOutcome, RegistrationRejection, RegistrationRequest,
    USER_FOUND_MESSAGE, USER_NOT_FOUND_MESSAGE, UserResponse,
};
pub use self::trace_id::TraceId;
pub use self::user::{
    MEMBER_CODE_DIGITS, MEMBER_CODE_PREFIX, MemberCode, MembershipLevel, User, UserId,
    UserValidationError,
};
pub use self::user_service::{UserService, UserServiceError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use membership_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
