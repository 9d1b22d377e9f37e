//! Local implementation of `PlannerClientV1`.
//!
//! Delegates to the domain service and converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use planner_sdk::{
    NewProject, NewUser, NewWorkspace, NewWorkspaceItem, OwnedProject, OwnedWorkspace,
    PlannerClientV1, PlannerError, Project, ProjectUpdate, ScopedWorkspaceItem, User, Workspace,
    WorkspaceItem, WorkspaceItemUpdate, WorkspaceUpdate,
};

use crate::domain::service::Service;

/// In-process client over the domain service.
pub struct LocalPlannerClient {
    service: Arc<Service>,
}

impl LocalPlannerClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PlannerClientV1 for LocalPlannerClient {
    // Workspace operations
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, PlannerError> {
        self.service.list_workspaces().await.map_err(Into::into)
    }

    async fn get_workspace(&self, id: i32) -> Result<Workspace, PlannerError> {
        self.service.get_workspace(id).await.map_err(Into::into)
    }

    async fn list_user_workspaces(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedWorkspace>, PlannerError> {
        self.service
            .list_user_workspaces(owner_id)
            .await
            .map_err(Into::into)
    }

    async fn create_workspace(&self, new: NewWorkspace) -> Result<Workspace, PlannerError> {
        self.service.create_workspace(new).await.map_err(Into::into)
    }

    async fn update_workspace(
        &self,
        id: i32,
        update: WorkspaceUpdate,
    ) -> Result<Workspace, PlannerError> {
        self.service
            .update_workspace(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_workspace(&self, id: i32) -> Result<Workspace, PlannerError> {
        self.service.delete_workspace(id).await.map_err(Into::into)
    }

    // Project operations
    async fn list_projects(&self) -> Result<Vec<Project>, PlannerError> {
        self.service.list_projects().await.map_err(Into::into)
    }

    async fn get_project(&self, id: i32) -> Result<Project, PlannerError> {
        self.service.get_project(id).await.map_err(Into::into)
    }

    async fn list_user_projects(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedProject>, PlannerError> {
        self.service
            .list_user_projects(owner_id)
            .await
            .map_err(Into::into)
    }

    async fn create_project(&self, new: NewProject) -> Result<Project, PlannerError> {
        self.service.create_project(new).await.map_err(Into::into)
    }

    async fn update_project(
        &self,
        id: i32,
        update: ProjectUpdate,
    ) -> Result<Project, PlannerError> {
        self.service
            .update_project(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_project(&self, id: i32) -> Result<Project, PlannerError> {
        self.service.delete_project(id).await.map_err(Into::into)
    }

    // Workspace item operations
    async fn list_items(&self) -> Result<Vec<WorkspaceItem>, PlannerError> {
        self.service.list_items().await.map_err(Into::into)
    }

    async fn get_item(&self, id: i32) -> Result<WorkspaceItem, PlannerError> {
        self.service.get_item(id).await.map_err(Into::into)
    }

    async fn list_workspace_items(
        &self,
        workspace_id: i32,
    ) -> Result<Vec<ScopedWorkspaceItem>, PlannerError> {
        self.service
            .list_workspace_items(workspace_id)
            .await
            .map_err(Into::into)
    }

    async fn create_item(&self, new: NewWorkspaceItem) -> Result<WorkspaceItem, PlannerError> {
        self.service.create_item(new).await.map_err(Into::into)
    }

    async fn update_item(
        &self,
        id: i32,
        update: WorkspaceItemUpdate,
    ) -> Result<WorkspaceItem, PlannerError> {
        self.service
            .update_item(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_item(&self, id: i32) -> Result<WorkspaceItem, PlannerError> {
        self.service.delete_item(id).await.map_err(Into::into)
    }

    // User operations
    async fn get_user(&self, id: &str) -> Result<User, PlannerError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn register_user(&self, new: NewUser) -> Result<User, PlannerError> {
        self.service.register_user(new).await.map_err(Into::into)
    }
}
