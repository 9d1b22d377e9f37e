#![allow(clippy::unwrap_used, clippy::expect_used)]

use planner_sdk::{ItemStatus, NewWorkspaceItem, WorkspaceItemUpdate};

use super::items::{status_for_create, status_for_update};
use crate::domain::error::DomainError;
use crate::test_support::{inmem_db, seed_item, seed_project, seed_user, seed_workspace, service};

#[test]
fn empty_status_defaults_only_on_create() {
    assert_eq!(status_for_create("").unwrap(), ItemStatus::NotStarted);
    assert_eq!(status_for_create("OnHold").unwrap(), ItemStatus::OnHold);
    assert!(matches!(
        status_for_update(""),
        Err(DomainError::Validation { ref field, .. }) if field == "status"
    ));
    assert_eq!(
        status_for_update("UnderRevision").unwrap(),
        ItemStatus::UnderRevision
    );
}

#[test]
fn unknown_status_is_rejected_on_both_paths() {
    assert!(matches!(
        status_for_create("Paused"),
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        status_for_update("Paused"),
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn create_item_with_empty_status_stores_not_started() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;

    let created = svc
        .create_item(NewWorkspaceItem {
            priority: 3,
            status: String::new(),
            workspace_id: ws.id,
            project_id: pr.id,
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.status, ItemStatus::NotStarted);
    let fetched = svc.get_item(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_item_for_unknown_workspace_leaves_store_unchanged() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;

    let err = svc
        .create_item(NewWorkspaceItem {
            priority: 1,
            status: "Started".to_owned(),
            workspace_id: 999,
            project_id: pr.id,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "Workspace", .. }));
    assert!(svc.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_item_for_unknown_project_is_rejected() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;

    let err = svc
        .create_item(NewWorkspaceItem {
            priority: 1,
            status: String::new(),
            workspace_id: ws.id,
            project_id: 4242,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "Project", .. }));
    assert!(svc.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_item_checks_references_before_staging() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;
    let item = seed_item(&db, ws.id, pr.id, 1).await;

    let err = svc
        .update_item(
            item.id,
            WorkspaceItemUpdate {
                priority: 7,
                status: "Started".to_owned(),
                workspace_id: 999,
                project_id: pr.id,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Workspace", ref id } if id == "999"));

    let err = svc
        .update_item(
            item.id,
            WorkspaceItemUpdate {
                priority: 7,
                status: "Started".to_owned(),
                workspace_id: ws.id,
                project_id: 999,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Project", .. }));

    let err = svc
        .update_item(
            12_345,
            WorkspaceItemUpdate {
                priority: 7,
                status: "Started".to_owned(),
                workspace_id: ws.id,
                project_id: pr.id,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "WorkspaceItem", .. }));

    let unchanged = svc.get_item(item.id).await.unwrap();
    assert_eq!(unchanged.priority, 1);
    assert_eq!(unchanged.status, ItemStatus::NotStarted);
}

#[tokio::test]
async fn update_item_with_empty_status_is_rejected() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;
    let item = seed_item(&db, ws.id, pr.id, 1).await;

    let err = svc
        .update_item(
            item.id,
            WorkspaceItemUpdate {
                priority: 2,
                status: String::new(),
                workspace_id: ws.id,
                project_id: pr.id,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "status"));
    assert_eq!(svc.get_item(item.id).await.unwrap().priority, 1);
}

#[tokio::test]
async fn update_item_replaces_every_field_but_identity() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;
    let other_ws = seed_workspace(&db, &owner.id, "Backlog").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;
    let item = seed_item(&db, ws.id, pr.id, 1).await;

    let updated = svc
        .update_item(
            item.id,
            WorkspaceItemUpdate {
                priority: 9,
                status: "Completed".to_owned(),
                workspace_id: other_ws.id,
                project_id: pr.id,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.created_at, item.created_at);
    assert_eq!(updated.priority, 9);
    assert_eq!(updated.status, ItemStatus::Completed);
    assert_eq!(updated.workspace_id, other_ws.id);
    assert_eq!(svc.get_item(item.id).await.unwrap(), updated);
}

#[tokio::test]
async fn delete_item_returns_the_removed_row() {
    let db = inmem_db().await;
    let svc = service(&db);
    let owner = seed_user(&db, "u1", "u1@example.com").await;
    let ws = seed_workspace(&db, &owner.id, "Board").await;
    let pr = seed_project(&db, &owner.id, "Launch").await;
    let item = seed_item(&db, ws.id, pr.id, 4).await;

    let removed = svc.delete_item(item.id).await.unwrap();
    assert_eq!(removed.id, item.id);
    assert_eq!(removed.priority, 4);

    let err = svc.get_item(item.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    let err = svc.delete_item(item.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
