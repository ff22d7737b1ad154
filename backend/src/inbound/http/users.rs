//! User registration and lookup handlers.
//!
//! ```text
//! POST /register {"first_name":"John","last_name":"Doe","phone":"081-234-5678","email":"john@example.com"}
//! GET /user/{id}
//! GET /users
//! ```
//!
//! These endpoints answer with the structured result envelope rather than the
//! error payload, so clients read `success` and `message` for every outcome.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{
    RegistrationOutcome, RegistrationRejection, RegistrationRequest, User, UserId, UserResponse,
};
use crate::inbound::http::error::{INTERNAL_ERROR_MESSAGE, MALFORMED_BODY_MESSAGE};
use crate::inbound::http::schemas::{UserResponseSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /register`.
///
/// Absent fields decode as empty strings and are reported by validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequestBody {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "081-234-5678")]
    pub phone: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<RegisterRequestBody> for RegistrationRequest {
    fn from(value: RegisterRequestBody) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            email: value.email,
        }
    }
}

/// Listing envelope for `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub success: bool,
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
    pub count: usize,
}

impl From<Vec<User>> for UsersListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            success: true,
            count: users.len(),
            users,
        }
    }
}

fn internal_failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(UserResponse::failure(INTERNAL_ERROR_MESSAGE))
}

/// Register a new member.
///
/// Assigns a fresh identifier and the next sequential member code.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequestBody,
    responses(
        (status = 201, description = "User registered", body = UserResponseSchema),
        (status = 400, description = "Malformed body or missing field", body = UserResponseSchema),
        (status = 409, description = "Email already registered", body = UserResponseSchema),
        (status = 500, description = "Internal server error", body = UserResponseSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: Result<web::Json<RegisterRequestBody>, actix_web::Error>,
) -> HttpResponse {
    let body = match payload {
        Ok(body) => body.into_inner(),
        Err(err) => {
            debug!(error = %err, "registration body rejected");
            return HttpResponse::BadRequest().json(UserResponse::failure(MALFORMED_BODY_MESSAGE));
        }
    };

    match state.users.register(body.into()).await {
        Ok(outcome @ RegistrationOutcome::Registered(_)) => {
            HttpResponse::Created().json(UserResponse::from(outcome))
        }
        Ok(RegistrationOutcome::Rejected(rejection @ RegistrationRejection::EmailTaken)) => {
            HttpResponse::Conflict().json(UserResponse::failure(rejection.message()))
        }
        Ok(RegistrationOutcome::Rejected(rejection)) => {
            HttpResponse::BadRequest().json(UserResponse::failure(rejection.message()))
        }
        Err(_) => internal_failure(),
    }
}

/// Fetch a member by internal identifier.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "Internal user identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponseSchema),
        (status = 404, description = "User not found", body = UserResponseSchema),
        (status = 500, description = "Internal server error", body = UserResponseSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    let id = UserId::new(path.into_inner());
    match state.users.get_user(&id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) if err.is_not_found() => HttpResponse::NotFound().json(err.into_response()),
        Err(_) => internal_failure(),
    }
}

/// List every registered member in registration order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UsersListResponse),
        (status = 500, description = "Internal server error", body = UserResponseSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> HttpResponse {
    match state.users.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UsersListResponse::from(users)),
        Err(err) => {
            error!(error = %err, "user listing failed");
            internal_failure()
        }
    }
}

#[cfg(test)]
mod tests;
