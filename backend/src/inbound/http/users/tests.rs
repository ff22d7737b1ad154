//! Tests for user registration and lookup handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    MockProfileCommand, MockProfileQuery, MockUserRegistration, UserPersistenceError,
};
use crate::domain::{MemberCode, RegistrationField, UserServiceError};

fn sample_user(id: &str) -> User {
    User::new(
        UserId::new(id),
        MemberCode::from_sequence(1),
        RegistrationRequest {
            first_name: "John".into(),
            last_name: "Doe".into(),
            phone: "081-234-5678".into(),
            email: "john@example.com".into(),
        },
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

fn test_app(
    users: MockUserRegistration,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(users),
        Arc::new(MockProfileQuery::new()),
        Arc::new(MockProfileCommand::new()),
    );
    App::new()
        .app_data(web::Data::new(state))
        .service(register)
        .service(get_user)
        .service(list_users)
}

async fn send(users: MockUserRegistration, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(users)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

fn register_request(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/register")
        .set_json(body)
}

#[actix_web::test]
async fn register_returns_created_envelope() {
    let mut users = MockUserRegistration::new();
    users
        .expect_register()
        .withf(|request| request.email == "john@example.com")
        .times(1)
        .returning(|_| Ok(RegistrationOutcome::Registered(sample_user("u-1"))));

    let (status, body) = send(
        users,
        register_request(json!({
            "first_name": "John",
            "last_name": "Doe",
            "phone": "081-234-5678",
            "email": "john@example.com",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["member_id"], "LBK000001");
    assert_eq!(body["user"]["membership_level"], "Gold");
}

#[rstest]
#[case::missing_field(
    RegistrationRejection::MissingField(RegistrationField::Phone),
    StatusCode::BAD_REQUEST,
    "phone number is required"
)]
#[case::duplicate_email(
    RegistrationRejection::EmailTaken,
    StatusCode::CONFLICT,
    "Email already registered"
)]
#[actix_web::test]
async fn register_maps_rejections_to_client_errors(
    #[case] rejection: RegistrationRejection,
    #[case] expected_status: StatusCode,
    #[case] expected_message: &str,
) {
    let mut users = MockUserRegistration::new();
    users
        .expect_register()
        .times(1)
        .returning(move |_| Ok(RegistrationOutcome::Rejected(rejection)));

    let (status, body) = send(users, register_request(json!({"first_name": "John"}))).await;

    assert_eq!(status, expected_status);
    assert_eq!(body, json!({"success": false, "message": expected_message}));
}

#[actix_web::test]
async fn register_rejects_malformed_body_without_calling_service() {
    let mut users = MockUserRegistration::new();
    users.expect_register().never();
    let request = actix_test::TestRequest::post()
        .uri("/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json");

    let (status, body) = send(users, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid request format"})
    );
}

#[actix_web::test]
async fn register_hides_storage_failures() {
    let mut users = MockUserRegistration::new();
    users.expect_register().times(1).returning(|_| {
        Err(UserServiceError::new(
            "Failed to create user",
            UserPersistenceError::storage("lock poisoned"),
        ))
    });

    let (status, body) = send(
        users,
        register_request(json!({
            "first_name": "John",
            "last_name": "Doe",
            "phone": "081-234-5678",
            "email": "john@example.com",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Internal server error"})
    );
}

#[actix_web::test]
async fn get_user_returns_found_envelope() {
    let mut users = MockUserRegistration::new();
    users
        .expect_get_user()
        .withf(|id| id.as_ref() == "u-1")
        .times(1)
        .returning(|id| Ok(UserResponse::success("User found", sample_user(id.as_ref()))));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/user/u-1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User found");
    assert_eq!(body["user"]["id"], "u-1");
}

#[rstest]
#[case::missing(
    UserPersistenceError::not_found("ghost"),
    StatusCode::NOT_FOUND,
    "User not found"
)]
#[case::storage(
    UserPersistenceError::storage("lock poisoned"),
    StatusCode::INTERNAL_SERVER_ERROR,
    "Internal server error"
)]
#[actix_web::test]
async fn get_user_maps_failures(
    #[case] source: UserPersistenceError,
    #[case] expected_status: StatusCode,
    #[case] expected_message: &str,
) {
    let mut users = MockUserRegistration::new();
    users.expect_get_user().times(1).returning(move |_| {
        let message = if source.is_not_found() {
            "User not found"
        } else {
            "Failed to retrieve user"
        };
        Err(UserServiceError::new(message, source.clone()))
    });

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/user/ghost")).await;

    assert_eq!(status, expected_status);
    assert_eq!(body, json!({"success": false, "message": expected_message}));
}

#[actix_web::test]
async fn list_users_returns_count_and_users() {
    let mut users = MockUserRegistration::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Ok(vec![sample_user("a"), sample_user("b")]));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["users"][1]["id"], "b");
}

#[actix_web::test]
async fn list_users_hides_storage_failures() {
    let mut users = MockUserRegistration::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Err(UserPersistenceError::storage("lock poisoned")));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Internal server error"})
    );
}
