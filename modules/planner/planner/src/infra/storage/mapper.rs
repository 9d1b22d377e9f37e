//! Conversions between `SeaORM` models and SDK contract types.

use planner_sdk::{ItemStatus, Project, User, UserSummary, Workspace, WorkspaceItem};

use crate::infra::storage::entity::{project, user, workspace, workspace_item};

impl From<workspace_item::Status> for ItemStatus {
    fn from(s: workspace_item::Status) -> Self {
        match s {
            workspace_item::Status::NotStarted => ItemStatus::NotStarted,
            workspace_item::Status::Started => ItemStatus::Started,
            workspace_item::Status::OnHold => ItemStatus::OnHold,
            workspace_item::Status::Completed => ItemStatus::Completed,
            workspace_item::Status::Canceled => ItemStatus::Canceled,
            workspace_item::Status::UnderRevision => ItemStatus::UnderRevision,
        }
    }
}

impl From<ItemStatus> for workspace_item::Status {
    fn from(s: ItemStatus) -> Self {
        match s {
            ItemStatus::NotStarted => workspace_item::Status::NotStarted,
            ItemStatus::Started => workspace_item::Status::Started,
            ItemStatus::OnHold => workspace_item::Status::OnHold,
            ItemStatus::Completed => workspace_item::Status::Completed,
            ItemStatus::Canceled => workspace_item::Status::Canceled,
            ItemStatus::UnderRevision => workspace_item::Status::UnderRevision,
        }
    }
}

impl From<user::Model> for User {
    fn from(e: user::Model) -> Self {
        Self {
            id: e.id,
            user_name: e.user_name,
            email: e.email,
            first_name: e.first_name,
            last_name: e.last_name,
        }
    }
}

impl From<user::Model> for UserSummary {
    fn from(e: user::Model) -> Self {
        User::from(e).into()
    }
}

impl From<workspace::Model> for Workspace {
    fn from(e: workspace::Model) -> Self {
        Self {
            id: e.id,
            created_at: e.created_at,
            name: e.name,
            description: e.description,
            owner_id: e.owner_id,
        }
    }
}

impl From<project::Model> for Project {
    fn from(e: project::Model) -> Self {
        Self {
            id: e.id,
            created_at: e.created_at,
            name: e.name,
            description: e.description,
            owner_id: e.owner_id,
        }
    }
}

impl From<workspace_item::Model> for WorkspaceItem {
    fn from(e: workspace_item::Model) -> Self {
        Self {
            id: e.id,
            created_at: e.created_at,
            priority: e.priority,
            status: e.status.into(),
            workspace_id: e.workspace_id,
            project_id: e.project_id,
        }
    }
}
