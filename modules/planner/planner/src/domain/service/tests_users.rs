#![allow(clippy::unwrap_used, clippy::expect_used)]

use planner_db::DbError;
use planner_sdk::NewUser;
use sea_orm::{ActiveModelTrait, Set};

use super::users::duplicate_to_validation;
use crate::domain::error::DomainError;
use crate::infra::storage::entity::user;
use crate::test_support::{inmem_db, seed_user, service};

fn new_user(id: Option<&str>, email: &str) -> NewUser {
    NewUser {
        id: id.map(str::to_owned),
        user_name: "someone".to_owned(),
        email: email.to_owned(),
        first_name: None,
        last_name: None,
    }
}

fn raw_user(id: &str, email: &str) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(id.to_owned()),
        user_name: Set("raw".to_owned()),
        email: Set(email.to_owned()),
        first_name: Set(None),
        last_name: Set(None),
    }
}

#[tokio::test]
async fn unique_email_violation_becomes_validation() {
    let db = inmem_db().await;
    seed_user(&db, "a", "same@example.com").await;

    let err = raw_user("b", "same@example.com")
        .insert(db.sea())
        .await
        .unwrap_err();
    let mapped = duplicate_to_validation(DbError::Sea(err));
    assert!(matches!(mapped, DomainError::Validation { ref field, .. } if field == "email"));
}

#[tokio::test]
async fn unique_id_violation_becomes_validation() {
    let db = inmem_db().await;
    seed_user(&db, "a", "a@example.com").await;

    let err = raw_user("a", "other@example.com")
        .insert(db.sea())
        .await
        .unwrap_err();
    let mapped = duplicate_to_validation(DbError::Sea(err));
    assert!(matches!(mapped, DomainError::Validation { ref field, .. } if field == "id"));
}

#[test]
fn other_store_faults_stay_database_errors() {
    let mapped = duplicate_to_validation(DbError::InvalidConfig("boom".to_owned()));
    assert!(matches!(mapped, DomainError::Database { .. }));
}

#[tokio::test]
async fn concurrent_registrations_with_one_email_yield_one_user() {
    let db = inmem_db().await;
    let svc = service(&db);

    let (a, b) = tokio::join!(
        svc.register_user(new_user(Some("a"), "same@example.com")),
        svc.register_user(new_user(Some("b"), "same@example.com")),
    );

    let (ok, err) = match (a, b) {
        (Ok(user), Err(err)) | (Err(err), Ok(user)) => (user, err),
        (a, b) => panic!("expected exactly one registration to win, got {a:?} and {b:?}"),
    };
    assert_eq!(ok.email, "same@example.com");
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "email"));
    assert_eq!(svc.uow().users.get_all().await.unwrap().len(), 1);
}
