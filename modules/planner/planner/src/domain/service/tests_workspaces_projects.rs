#![allow(clippy::unwrap_used, clippy::expect_used)]

use planner_sdk::{NewProject, NewWorkspace, ProjectUpdate, WorkspaceUpdate};

use crate::domain::error::DomainError;
use crate::test_support::{inmem_db, seed_user, service};

#[tokio::test]
async fn create_workspace_returns_the_stored_row() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;

    let created = svc
        .create_workspace(NewWorkspace {
            name: "Board".to_owned(),
            description: Some("team board".to_owned()),
            owner_id: "alice".to_owned(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Board");
    assert_eq!(created.description.as_deref(), Some("team board"));
    assert_eq!(created.owner_id, "alice");
    assert_eq!(svc.get_workspace(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn update_workspace_replaces_fields_and_keeps_identity() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;
    seed_user(&db, "bob", "bob@example.com").await;
    let created = svc
        .create_workspace(NewWorkspace {
            name: "Board".to_owned(),
            description: Some("team board".to_owned()),
            owner_id: "alice".to_owned(),
        })
        .await
        .unwrap();

    let updated = svc
        .update_workspace(
            created.id,
            WorkspaceUpdate {
                name: "Renamed".to_owned(),
                description: None,
                owner_id: "bob".to_owned(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.owner_id, "bob");
    assert_eq!(svc.get_workspace(created.id).await.unwrap(), updated);
    assert!(svc.list_user_workspaces("alice").await.unwrap().is_empty());
    assert_eq!(svc.list_user_workspaces("bob").await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_missing_workspace_is_not_found() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;

    let err = svc
        .update_workspace(
            77,
            WorkspaceUpdate {
                name: "Ghost".to_owned(),
                description: None,
                owner_id: "alice".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Workspace", ref id } if id == "77"));
}

#[tokio::test]
async fn concurrent_workspace_renames_both_succeed_and_the_later_commit_wins() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;
    let ws = svc
        .create_workspace(NewWorkspace {
            name: "Board".to_owned(),
            description: None,
            owner_id: "alice".to_owned(),
        })
        .await
        .unwrap();

    let rename = |name: &str| WorkspaceUpdate {
        name: name.to_owned(),
        description: None,
        owner_id: "alice".to_owned(),
    };
    // Both share one pooled connection; the first future polled commits first.
    let (x, y) = tokio::join!(
        svc.update_workspace(ws.id, rename("X")),
        svc.update_workspace(ws.id, rename("Y")),
    );

    assert_eq!(x.unwrap().name, "X");
    assert_eq!(y.unwrap().name, "Y");
    assert_eq!(svc.get_workspace(ws.id).await.unwrap().name, "Y");
}

#[tokio::test]
async fn create_and_update_project() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;

    let created = svc
        .create_project(NewProject {
            name: "Launch".to_owned(),
            description: None,
            owner_id: "alice".to_owned(),
        })
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(svc.get_project(created.id).await.unwrap(), created);

    let updated = svc
        .update_project(
            created.id,
            ProjectUpdate {
                name: "Launch v2".to_owned(),
                description: Some("second cut".to_owned()),
                owner_id: "alice".to_owned(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Launch v2");
    assert_eq!(svc.get_project(created.id).await.unwrap(), updated);

    let owned = svc.list_user_projects("alice").await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].project, updated);

    let removed = svc.delete_project(created.id).await.unwrap();
    assert_eq!(removed, updated);
    assert!(svc.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_of_missing_project_is_not_found() {
    let db = inmem_db().await;
    let svc = service(&db);
    seed_user(&db, "alice", "alice@example.com").await;

    let err = svc
        .update_project(
            5,
            ProjectUpdate {
                name: "Ghost".to_owned(),
                description: None,
                owner_id: "alice".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Project", .. }));
}
