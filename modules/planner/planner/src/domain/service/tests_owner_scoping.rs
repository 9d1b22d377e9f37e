#![allow(clippy::unwrap_used, clippy::expect_used)]

use planner_sdk::{NewProject, NewWorkspace, WorkspaceUpdate};

use crate::domain::error::DomainError;
use crate::test_support::{inmem_db, seed_item, seed_project, seed_user, seed_workspace, service};

#[tokio::test]
async fn user_workspaces_are_filtered_by_owner_with_owner_attached() {
    let db = inmem_db().await;
    let svc = service(&db);
    let alice = seed_user(&db, "alice", "alice@example.com").await;
    let bob = seed_user(&db, "bob", "bob@example.com").await;
    let a1 = seed_workspace(&db, &alice.id, "A1").await;
    seed_workspace(&db, &bob.id, "B1").await;
    let a2 = seed_workspace(&db, &alice.id, "A2").await;

    let owned = svc.list_user_workspaces(&alice.id).await.unwrap();
    let ids: Vec<_> = owned.iter().map(|o| o.workspace.id).collect();
    assert_eq!(ids, [a1.id, a2.id]);
    for o in &owned {
        let owner = o.owner.as_ref().unwrap();
        assert_eq!(owner.id, alice.id);
        assert_eq!(owner.email, "alice@example.com");
    }

    let again = svc.list_user_workspaces(&alice.id).await.unwrap();
    assert_eq!(owned, again);
}

#[tokio::test]
async fn unknown_owner_is_not_found_not_empty() {
    let db = inmem_db().await;
    let svc = service(&db);

    let err = svc.list_user_workspaces("ghost").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", ref id } if id == "ghost"));
    let err = svc.list_user_projects("ghost").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
}

#[tokio::test]
async fn owner_without_rows_gets_an_empty_list() {
    let db = inmem_db().await;
    let svc = service(&db);
    let carol = seed_user(&db, "carol", "carol@example.com").await;

    assert!(svc.list_user_workspaces(&carol.id).await.unwrap().is_empty());
    assert!(svc.list_user_projects(&carol.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn user_projects_carry_their_owner() {
    let db = inmem_db().await;
    let svc = service(&db);
    let alice = seed_user(&db, "alice", "alice@example.com").await;
    let bob = seed_user(&db, "bob", "bob@example.com").await;
    seed_project(&db, &alice.id, "Alpha").await;
    let b = seed_project(&db, &bob.id, "Beta").await;

    let owned = svc.list_user_projects(&bob.id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].project.id, b.id);
    assert_eq!(owned[0].owner.as_ref().map(|o| o.id.as_str()), Some("bob"));
}

#[tokio::test]
async fn workspace_items_carry_their_project_even_when_it_is_gone() {
    let db = inmem_db().await;
    let svc = service(&db);
    let alice = seed_user(&db, "alice", "alice@example.com").await;
    let ws = seed_workspace(&db, &alice.id, "Board").await;
    let other = seed_workspace(&db, &alice.id, "Other").await;
    let kept = seed_project(&db, &alice.id, "Kept").await;
    let doomed = seed_project(&db, &alice.id, "Doomed").await;
    let i1 = seed_item(&db, ws.id, kept.id, 1).await;
    let i2 = seed_item(&db, ws.id, doomed.id, 2).await;
    seed_item(&db, other.id, kept.id, 3).await;

    svc.delete_project(doomed.id).await.unwrap();

    let scoped = svc.list_workspace_items(ws.id).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert_eq!(scoped[0].item.id, i1.id);
    assert_eq!(scoped[0].project.as_ref().map(|p| p.id), Some(kept.id));
    assert_eq!(scoped[1].item.id, i2.id);
    assert!(scoped[1].project.is_none());

    let err = svc.list_workspace_items(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Workspace", .. }));
}

#[tokio::test]
async fn creating_for_unknown_owner_is_rejected() {
    let db = inmem_db().await;
    let svc = service(&db);

    let err = svc
        .create_workspace(NewWorkspace {
            name: "Board".to_owned(),
            description: None,
            owner_id: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));

    let err = svc
        .create_project(NewProject {
            name: "Launch".to_owned(),
            description: None,
            owner_id: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));

    assert!(svc.list_workspaces().await.unwrap().is_empty());
    assert!(svc.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_cannot_move_a_workspace_to_an_unknown_owner() {
    let db = inmem_db().await;
    let svc = service(&db);
    let alice = seed_user(&db, "alice", "alice@example.com").await;
    let ws = seed_workspace(&db, &alice.id, "Board").await;

    let err = svc
        .update_workspace(
            ws.id,
            WorkspaceUpdate {
                name: "Board".to_owned(),
                description: None,
                owner_id: "ghost".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
    assert_eq!(svc.get_workspace(ws.id).await.unwrap().owner_id, "alice");
}

#[tokio::test]
async fn names_are_validated_before_any_lookup() {
    let db = inmem_db().await;
    let svc = service(&db);

    let err = svc
        .create_workspace(NewWorkspace {
            name: "   ".to_owned(),
            description: None,
            owner_id: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "name"));

    let err = svc
        .create_project(NewProject {
            name: "x".repeat(svc.config().max_name_length + 1),
            description: None,
            owner_id: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "name"));

    let err = svc
        .create_project(NewProject {
            name: "ok".to_owned(),
            description: Some("d".repeat(svc.config().max_description_length + 1)),
            owner_id: "ghost".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "description"));
}

#[tokio::test]
async fn deleting_a_workspace_orphans_its_items() {
    let db = inmem_db().await;
    let svc = service(&db);
    let alice = seed_user(&db, "alice", "alice@example.com").await;
    let ws = seed_workspace(&db, &alice.id, "Board").await;
    let pr = seed_project(&db, &alice.id, "Launch").await;
    let item = seed_item(&db, ws.id, pr.id, 1).await;

    let removed = svc.delete_workspace(ws.id).await.unwrap();
    assert_eq!(removed.id, ws.id);
    assert_eq!(removed.name, "Board");

    let orphan = svc.get_item(item.id).await.unwrap();
    assert_eq!(orphan.workspace_id, ws.id);
    assert!(matches!(
        svc.get_workspace(ws.id).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
}
