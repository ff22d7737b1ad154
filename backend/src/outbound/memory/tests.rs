//! Tests for the in-memory user repository.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{MemberCode, MembershipLevel, RegistrationRequest};

fn user(id: &str, sequence: u64, email: &str) -> User {
    User::new(
        UserId::new(id),
        MemberCode::from_sequence(sequence),
        RegistrationRequest {
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: "080-000-0000".into(),
            email: email.into(),
        },
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

#[fixture]
fn repo() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
}

#[rstest]
#[tokio::test]
async fn create_then_find_by_id(repo: InMemoryUserRepository) {
    let stored = user("u-1", 1, "one@example.com");
    repo.create(&stored).await.expect("create succeeds");

    let found = repo
        .find_by_id(&UserId::new("u-1"))
        .await
        .expect("record exists");
    assert_eq!(found, stored);
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn create_rejects_empty_id(repo: InMemoryUserRepository) {
    let error = repo
        .create(&user("", 1, "blank@example.com"))
        .await
        .expect_err("empty id");
    assert!(error.is_invalid_input());
    assert_eq!(repo.count().await.expect("count"), 0);
}

#[rstest]
#[tokio::test]
async fn create_overwrites_in_place(repo: InMemoryUserRepository) {
    repo.create(&user("a", 1, "a@example.com")).await.expect("create a");
    repo.create(&user("b", 2, "b@example.com")).await.expect("create b");
    repo.create(&user("a", 1, "a2@example.com"))
        .await
        .expect("overwrite a");

    let users = repo.list().await.expect("list");
    let emails: Vec<&str> = users.iter().map(User::email).collect();
    assert_eq!(emails, ["a2@example.com", "b@example.com"]);
}

#[rstest]
#[tokio::test]
async fn find_by_id_reports_missing_record(repo: InMemoryUserRepository) {
    let error = repo
        .find_by_id(&UserId::new("ghost"))
        .await
        .expect_err("missing");
    assert_eq!(error, UserPersistenceError::not_found("ghost"));
}

#[rstest]
#[tokio::test]
async fn find_by_email_returns_first_inserted_match(repo: InMemoryUserRepository) {
    repo.create(&user("first", 1, "dup@example.com"))
        .await
        .expect("create first");
    repo.create(&user("second", 2, "dup@example.com"))
        .await
        .expect("create second");

    let found = repo
        .find_by_email("dup@example.com")
        .await
        .expect("match");
    assert_eq!(found.id().as_ref(), "first");

    let error = repo
        .find_by_email("nobody@example.com")
        .await
        .expect_err("no match");
    assert!(error.is_not_found());
}

#[rstest]
#[tokio::test]
async fn list_preserves_insertion_order(repo: InMemoryUserRepository) {
    for (index, id) in ["c", "a", "b"].into_iter().enumerate() {
        let sequence = u64::try_from(index).expect("small index") + 1;
        repo.create(&user(id, sequence, &format!("{id}@example.com")))
            .await
            .expect("create");
    }

    let users = repo.list().await.expect("list");
    let ids: Vec<&str> = users.iter().map(|user| user.id().as_ref()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[rstest]
#[tokio::test]
async fn update_replaces_existing_record(repo: InMemoryUserRepository) {
    repo.create(&user("u-1", 1, "one@example.com"))
        .await
        .expect("create");
    let promoted = user("u-1", 1, "one@example.com")
        .with_membership_level(MembershipLevel::Platinum)
        .with_points(500);

    repo.update(&promoted).await.expect("update");

    let found = repo
        .find_by_id(&UserId::new("u-1"))
        .await
        .expect("record exists");
    assert_eq!(found.membership_level(), MembershipLevel::Platinum);
    assert_eq!(found.points(), 500);
}

#[rstest]
#[case::empty_id("", true)]
#[case::unknown_id("ghost", false)]
#[tokio::test]
async fn update_rejects_bad_targets(
    repo: InMemoryUserRepository,
    #[case] id: &str,
    #[case] invalid_input: bool,
) {
    let error = repo
        .update(&user(id, 1, "x@example.com"))
        .await
        .expect_err("update fails");
    assert_eq!(error.is_invalid_input(), invalid_input);
    assert_eq!(error.is_not_found(), !invalid_input);
}

#[rstest]
#[tokio::test]
async fn delete_removes_record_and_order_slot(repo: InMemoryUserRepository) {
    repo.create(&user("a", 1, "a@example.com")).await.expect("create a");
    repo.create(&user("b", 2, "b@example.com")).await.expect("create b");

    repo.delete(&UserId::new("a")).await.expect("delete a");

    let users = repo.list().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id().as_ref(), "b");
    assert_eq!(repo.count().await.expect("count"), 1);

    let error = repo
        .delete(&UserId::new("a"))
        .await
        .expect_err("already deleted");
    assert!(error.is_not_found());
}
