//! Profile HTTP handlers.
//!
//! ```text
//! GET /profile
//! PUT /profile {"first_name":"X"}
//! ```

use actix_web::{HttpResponse, get, put, web};

use crate::domain::ProfilePatch;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::malformed_body;
use crate::inbound::http::schemas::{ErrorSchema, ProfilePatchSchema, ProfileSchema};
use crate::inbound::http::state::HttpState;

/// Fetch the membership profile.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Current profile", body = ProfileSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let profile = state.profile.profile()?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Partially update the membership profile.
///
/// Only non-empty strings and non-zero points are written.
#[utoipa::path(
    put,
    path = "/profile",
    request_body = ProfilePatchSchema,
    responses(
        (status = 200, description = "Updated profile", body = ProfileSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    payload: Result<web::Json<ProfilePatch>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let patch = payload.map_err(|err| malformed_body(&err))?.into_inner();
    let profile = state.profile_command.update_profile(patch)?;
    Ok(HttpResponse::Ok().json(profile))
}
