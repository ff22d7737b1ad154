//! Behaviour tests for member registration, lookup, and listing over HTTP.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

#[path = "support/membership_http.rs"]
mod membership_http;

use actix_web::test::TestRequest;
use membership_http::HttpWorld;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct RegistrationWorld {
    http: HttpWorld,
    registered_id: Option<String>,
}

#[fixture]
fn world() -> RegistrationWorld {
    RegistrationWorld {
        http: HttpWorld::new(),
        registered_id: None,
    }
}

fn registration_body(email: &str) -> Value {
    json!({
        "first_name": "John",
        "last_name": "Doe",
        "phone": "081-234-5678",
        "email": email,
    })
}

fn post_registration(world: &mut RegistrationWorld, body: Value) {
    world
        .http
        .send(TestRequest::post().uri("/register").set_json(body));
    if let Some(id) = world.http.body()["user"]["id"].as_str() {
        world.registered_id = Some(id.to_owned());
    }
}

#[given("an empty membership service")]
fn an_empty_membership_service(world: &mut RegistrationWorld) {
    assert!(world.http.last_status.is_none(), "world should start fresh");
}

#[given("a member already registered with email {email}")]
fn a_member_already_registered(world: &mut RegistrationWorld, email: String) {
    post_registration(world, registration_body(&email));
    assert_eq!(world.http.status(), 201, "seed registration should succeed");
}

#[when("a member registers with email {email}")]
fn a_member_registers(world: &mut RegistrationWorld, email: String) {
    post_registration(world, registration_body(&email));
}

#[when("a member registers without a phone number")]
fn a_member_registers_without_phone(world: &mut RegistrationWorld) {
    let mut body = registration_body("john@example.com");
    if let Some(fields) = body.as_object_mut() {
        fields.remove("phone");
    }
    post_registration(world, body);
}

#[when("the registered member is looked up")]
fn the_registered_member_is_looked_up(world: &mut RegistrationWorld) {
    let id = world
        .registered_id
        .clone()
        .expect("a member should be registered");
    world
        .http
        .send(TestRequest::get().uri(&format!("/user/{id}")));
}

#[when("the member {id} is looked up")]
fn the_member_is_looked_up(world: &mut RegistrationWorld, id: String) {
    world
        .http
        .send(TestRequest::get().uri(&format!("/user/{id}")));
}

#[when("the members are listed")]
fn the_members_are_listed(world: &mut RegistrationWorld) {
    world.http.send(TestRequest::get().uri("/users"));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &mut RegistrationWorld, status: u16) {
    assert_eq!(world.http.status(), status);
}

#[then("the registered member code is {code}")]
fn the_registered_member_code_is(world: &mut RegistrationWorld, code: String) {
    assert_eq!(world.http.body()["user"]["member_id"], code.as_str());
    assert_eq!(world.http.body()["user"]["membership_level"], "Gold");
    assert_eq!(world.http.body()["user"]["points"], 0);
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &mut RegistrationWorld) {
    let trace_id = world
        .http
        .last_trace_id
        .as_deref()
        .expect("trace id header should be present");
    assert!(!trace_id.is_empty());
}

#[then("the response message is {message}")]
fn the_response_message_is(world: &mut RegistrationWorld, message: String) {
    assert_eq!(world.http.body()["message"], message.as_str());
}

#[then("the listing holds {count} members")]
fn the_listing_holds(world: &mut RegistrationWorld, count: usize) {
    let body = world.http.body();
    assert_eq!(body["count"], count);
    assert_eq!(
        body["users"].as_array().map(Vec::len),
        Some(count),
        "count should match the listed users"
    );
}

#[then("the second listed member code is {code}")]
fn the_second_listed_member_code_is(world: &mut RegistrationWorld, code: String) {
    let body = world.http.body();
    assert_eq!(body["users"][1]["member_id"], code.as_str());
    assert_eq!(body["users"][1]["email"], "b@example.com");
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "A new member is registered"
)]
fn a_new_member_is_registered(world: RegistrationWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "A duplicate email is rejected"
)]
fn a_duplicate_email_is_rejected(world: RegistrationWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "A registration without a phone number is rejected"
)]
fn a_registration_without_a_phone_number_is_rejected(world: RegistrationWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "A registered member can be looked up"
)]
fn a_registered_member_can_be_looked_up(world: RegistrationWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "An unknown member is not found"
)]
fn an_unknown_member_is_not_found(world: RegistrationWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/registration.feature",
    name = "Members are listed in registration order"
)]
fn members_are_listed_in_registration_order(world: RegistrationWorld) {
    drop(world);
}
