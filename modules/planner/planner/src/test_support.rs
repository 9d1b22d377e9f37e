#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]
//! Shared fixtures for unit and integration tests.

use std::sync::Arc;

use planner_db::{ConnectOpts, DbHandle};
use sea_orm::{ActiveModelTrait, Set};
use time::OffsetDateTime;

use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::Migrator;
use crate::infra::storage::entity::{project, user, workspace, workspace_item};

/// Fresh in-memory `SQLite` database with the planner schema.
pub async fn inmem_db() -> DbHandle {
    let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .expect("Failed to connect to in-memory database");

    db.migrate::<Migrator>()
        .await
        .expect("Failed to run migrations");

    db
}

#[must_use]
pub fn service(db: &DbHandle) -> Arc<Service> {
    Arc::new(Service::new(db.clone(), ServiceConfig::default()))
}

pub async fn seed_user(db: &DbHandle, id: &str, email: &str) -> user::Model {
    user::ActiveModel {
        id: Set(id.to_owned()),
        user_name: Set(format!("{id}_name")),
        email: Set(email.to_owned()),
        first_name: Set(Some(format!("{id}_first"))),
        last_name: Set(None),
    }
    .insert(db.sea())
    .await
    .expect("Failed to seed user")
}

pub async fn seed_workspace(db: &DbHandle, owner_id: &str, name: &str) -> workspace::Model {
    workspace::ActiveModel {
        created_at: Set(OffsetDateTime::now_utc()),
        name: Set(name.to_owned()),
        description: Set(None),
        owner_id: Set(owner_id.to_owned()),
        ..Default::default()
    }
    .insert(db.sea())
    .await
    .expect("Failed to seed workspace")
}

pub async fn seed_project(db: &DbHandle, owner_id: &str, name: &str) -> project::Model {
    project::ActiveModel {
        created_at: Set(OffsetDateTime::now_utc()),
        name: Set(name.to_owned()),
        description: Set(Some(format!("{name} description"))),
        owner_id: Set(owner_id.to_owned()),
        ..Default::default()
    }
    .insert(db.sea())
    .await
    .expect("Failed to seed project")
}

pub async fn seed_item(
    db: &DbHandle,
    workspace_id: i32,
    project_id: i32,
    priority: i32,
) -> workspace_item::Model {
    workspace_item::ActiveModel {
        created_at: Set(OffsetDateTime::now_utc()),
        priority: Set(priority),
        status: Set(workspace_item::Status::NotStarted),
        workspace_id: Set(workspace_id),
        project_id: Set(project_id),
        ..Default::default()
    }
    .insert(db.sea())
    .await
    .expect("Failed to seed workspace item")
}
