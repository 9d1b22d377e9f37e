//! Domain service layer: ownership-scoped reads and consistency checks.
//!
//! Every operation opens its own [`PlannerUnitOfWork`]. Reads that are scoped
//! to a parent (a user's workspaces or projects, a workspace's items) first
//! check that the parent exists, then push the parent filter to the store and
//! resolve the related object of every row, one row at a time. Mutations check
//! the target and every referenced parent before anything is staged, then
//! commit through `save`; a save that changes nothing is an error.
//!
//! Per-resource submodules:
//! - `workspaces` - workspace CRUD and owner-scoped listing
//! - `projects` - project CRUD and owner-scoped listing
//! - `items` - workspace item CRUD, status defaulting and workspace-scoped listing
//! - `users` - user lookup and registration

use planner_db::{Condition, DbHandle};
use planner_sdk::{
    NewProject, NewUser, NewWorkspace, NewWorkspaceItem, OwnedProject, OwnedWorkspace, Project,
    ProjectUpdate, ScopedWorkspaceItem, User, Workspace, WorkspaceItem, WorkspaceItemUpdate,
    WorkspaceUpdate,
};
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::domain::error::DomainError;
use crate::infra::storage::PlannerUnitOfWork;
use crate::infra::storage::entity::{project, user, workspace};

mod items;
mod projects;
mod users;
mod workspaces;

/// Configuration for the domain service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Upper bound, in characters, for workspace, project and user names.
    pub max_name_length: usize,
    /// Upper bound, in characters, for descriptions.
    pub max_description_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
            max_description_length: 2000,
        }
    }
}

/// Domain service over the planner tables.
#[derive(Clone)]
pub struct Service {
    db: DbHandle,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(db: DbHandle, config: ServiceConfig) -> Self {
        Self { db, config }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fresh unit of work for one operation.
    fn uow(&self) -> PlannerUnitOfWork {
        PlannerUnitOfWork::new(&self.db)
    }

    fn validate_name(&self, field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, "must not be empty"));
        }
        let len = value.chars().count();
        if len > self.config.max_name_length {
            return Err(DomainError::validation(
                field,
                format!(
                    "too long: {len} characters (max: {})",
                    self.config.max_name_length
                ),
            ));
        }
        Ok(())
    }

    fn validate_description(&self, value: Option<&str>) -> Result<(), DomainError> {
        let len = value.map_or(0, |d| d.chars().count());
        if len > self.config.max_description_length {
            return Err(DomainError::validation(
                "description",
                format!(
                    "too long: {len} characters (max: {})",
                    self.config.max_description_length
                ),
            ));
        }
        Ok(())
    }

    // --- workspaces ---

    #[instrument(skip(self))]
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, DomainError> {
        workspaces::list_workspaces(self).await
    }

    #[instrument(skip(self), fields(workspace_id = id))]
    pub async fn get_workspace(&self, id: i32) -> Result<Workspace, DomainError> {
        workspaces::get_workspace(self, id).await
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn list_user_workspaces(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedWorkspace>, DomainError> {
        workspaces::list_user_workspaces(self, owner_id).await
    }

    #[instrument(skip(self, new), fields(owner_id = %new.owner_id))]
    pub async fn create_workspace(&self, new: NewWorkspace) -> Result<Workspace, DomainError> {
        workspaces::create_workspace(self, new).await
    }

    #[instrument(skip(self, update), fields(workspace_id = id))]
    pub async fn update_workspace(
        &self,
        id: i32,
        update: WorkspaceUpdate,
    ) -> Result<Workspace, DomainError> {
        workspaces::update_workspace(self, id, update).await
    }

    #[instrument(skip(self), fields(workspace_id = id))]
    pub async fn delete_workspace(&self, id: i32) -> Result<Workspace, DomainError> {
        workspaces::delete_workspace(self, id).await
    }

    // --- projects ---

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        projects::list_projects(self).await
    }

    #[instrument(skip(self), fields(project_id = id))]
    pub async fn get_project(&self, id: i32) -> Result<Project, DomainError> {
        projects::get_project(self, id).await
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn list_user_projects(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedProject>, DomainError> {
        projects::list_user_projects(self, owner_id).await
    }

    #[instrument(skip(self, new), fields(owner_id = %new.owner_id))]
    pub async fn create_project(&self, new: NewProject) -> Result<Project, DomainError> {
        projects::create_project(self, new).await
    }

    #[instrument(skip(self, update), fields(project_id = id))]
    pub async fn update_project(
        &self,
        id: i32,
        update: ProjectUpdate,
    ) -> Result<Project, DomainError> {
        projects::update_project(self, id, update).await
    }

    #[instrument(skip(self), fields(project_id = id))]
    pub async fn delete_project(&self, id: i32) -> Result<Project, DomainError> {
        projects::delete_project(self, id).await
    }

    // --- workspace items ---

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<WorkspaceItem>, DomainError> {
        items::list_items(self).await
    }

    #[instrument(skip(self), fields(item_id = id))]
    pub async fn get_item(&self, id: i32) -> Result<WorkspaceItem, DomainError> {
        items::get_item(self, id).await
    }

    #[instrument(skip(self), fields(workspace_id = workspace_id))]
    pub async fn list_workspace_items(
        &self,
        workspace_id: i32,
    ) -> Result<Vec<ScopedWorkspaceItem>, DomainError> {
        items::list_workspace_items(self, workspace_id).await
    }

    #[instrument(
        skip(self, new),
        fields(workspace_id = new.workspace_id, project_id = new.project_id)
    )]
    pub async fn create_item(&self, new: NewWorkspaceItem) -> Result<WorkspaceItem, DomainError> {
        items::create_item(self, new).await
    }

    #[instrument(skip(self, update), fields(item_id = id))]
    pub async fn update_item(
        &self,
        id: i32,
        update: WorkspaceItemUpdate,
    ) -> Result<WorkspaceItem, DomainError> {
        items::update_item(self, id, update).await
    }

    #[instrument(skip(self), fields(item_id = id))]
    pub async fn delete_item(&self, id: i32) -> Result<WorkspaceItem, DomainError> {
        items::delete_item(self, id).await
    }

    // --- users ---

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        users::get_user(self, id).await
    }

    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn register_user(&self, new: NewUser) -> Result<User, DomainError> {
        users::register_user(self, new).await
    }
}

async fn ensure_user_exists(uow: &PlannerUnitOfWork, id: &str) -> Result<(), DomainError> {
    let found = uow
        .users
        .exists(Condition::all().add(Expr::col(user::Column::Id).eq(id)))
        .await?;
    if !found {
        warn!(user_id = %id, "referenced user does not exist");
        return Err(DomainError::not_found("User", id));
    }
    Ok(())
}

async fn ensure_workspace_exists(uow: &PlannerUnitOfWork, id: i32) -> Result<(), DomainError> {
    let found = uow
        .workspaces
        .exists(Condition::all().add(Expr::col(workspace::Column::Id).eq(id)))
        .await?;
    if !found {
        warn!(workspace_id = id, "referenced workspace does not exist");
        return Err(DomainError::not_found("Workspace", id));
    }
    Ok(())
}

async fn ensure_project_exists(uow: &PlannerUnitOfWork, id: i32) -> Result<(), DomainError> {
    let found = uow
        .projects
        .exists(Condition::all().add(Expr::col(project::Column::Id).eq(id)))
        .await?;
    if !found {
        warn!(project_id = id, "referenced project does not exist");
        return Err(DomainError::not_found("Project", id));
    }
    Ok(())
}

#[cfg(test)]
mod tests_items;

#[cfg(test)]
mod tests_owner_scoping;

#[cfg(test)]
mod tests_users;

#[cfg(test)]
mod tests_workspaces_projects;
