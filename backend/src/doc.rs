//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (profile, users,
//!   health)
//! - **Schemas**: domain type wrappers such as [`ErrorSchema`] and
//!   [`UserSchema`] that provide OpenAPI definitions without coupling domain
//!   types to the utoipa framework
//!
//! The document is served at `/swagger/doc.json`; debug builds also mount
//! Swagger UI under `/swagger/`.

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MembershipLevelSchema, ProfilePatchSchema, ProfileSchema,
    UserResponseSchema, UserSchema,
};
use crate::inbound::http::users::{RegisterRequestBody, UsersListResponse};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/swagger/doc.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Membership API",
        description = "Member registration, lookup, and the membership profile shown in the profile UI."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::users::register,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        UserResponseSchema,
        MembershipLevelSchema,
        ProfileSchema,
        ProfilePatchSchema,
        RegisterRequestBody,
        UsersListResponse,
        HealthStatus,
    )),
    tags(
        (name = "profile", description = "The membership profile"),
        (name = "users", description = "Member registration and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
///
/// Release builds mount this handler directly; debug builds let Swagger UI
/// serve the same document.
#[get("/swagger/doc.json")]
pub async fn openapi_document() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
