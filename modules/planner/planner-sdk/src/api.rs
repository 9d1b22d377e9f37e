//! `PlannerClientV1` trait definition.

use async_trait::async_trait;

use crate::errors::PlannerError;
use crate::models::{
    NewProject, NewUser, NewWorkspace, NewWorkspaceItem, OwnedProject, OwnedWorkspace, Project,
    ProjectUpdate, ScopedWorkspaceItem, User, Workspace, WorkspaceItem, WorkspaceItemUpdate,
    WorkspaceUpdate,
};

/// Public API trait for the planner module (Version 1).
///
/// Every call runs in its own unit of work. Mutations are checked for
/// referential consistency before anything is written; a referenced row that
/// does not exist yields `PlannerError::NotFound`.
#[async_trait]
pub trait PlannerClientV1: Send + Sync {
    // --- workspaces ---

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, PlannerError>;

    async fn get_workspace(&self, id: i32) -> Result<Workspace, PlannerError>;

    /// Workspaces owned by `owner_id`, each with its owner attached.
    /// Fails with `NotFound` when the user does not exist.
    async fn list_user_workspaces(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedWorkspace>, PlannerError>;

    async fn create_workspace(&self, new: NewWorkspace) -> Result<Workspace, PlannerError>;

    /// Full replacement of an existing workspace.
    async fn update_workspace(
        &self,
        id: i32,
        update: WorkspaceUpdate,
    ) -> Result<Workspace, PlannerError>;

    /// Removes the workspace and returns it. Its items are left in place.
    async fn delete_workspace(&self, id: i32) -> Result<Workspace, PlannerError>;

    // --- projects ---

    async fn list_projects(&self) -> Result<Vec<Project>, PlannerError>;

    async fn get_project(&self, id: i32) -> Result<Project, PlannerError>;

    /// Projects owned by `owner_id`, each with its owner attached.
    async fn list_user_projects(&self, owner_id: &str)
    -> Result<Vec<OwnedProject>, PlannerError>;

    async fn create_project(&self, new: NewProject) -> Result<Project, PlannerError>;

    async fn update_project(
        &self,
        id: i32,
        update: ProjectUpdate,
    ) -> Result<Project, PlannerError>;

    async fn delete_project(&self, id: i32) -> Result<Project, PlannerError>;

    // --- workspace items ---

    async fn list_items(&self) -> Result<Vec<WorkspaceItem>, PlannerError>;

    async fn get_item(&self, id: i32) -> Result<WorkspaceItem, PlannerError>;

    /// Items of `workspace_id`, each with its project attached.
    async fn list_workspace_items(
        &self,
        workspace_id: i32,
    ) -> Result<Vec<ScopedWorkspaceItem>, PlannerError>;

    /// Creates an item. An empty status defaults to `NotStarted`.
    async fn create_item(&self, new: NewWorkspaceItem) -> Result<WorkspaceItem, PlannerError>;

    /// Full replacement of an existing item. An empty status is rejected.
    async fn update_item(
        &self,
        id: i32,
        update: WorkspaceItemUpdate,
    ) -> Result<WorkspaceItem, PlannerError>;

    async fn delete_item(&self, id: i32) -> Result<WorkspaceItem, PlannerError>;

    // --- users ---

    async fn get_user(&self, id: &str) -> Result<User, PlannerError>;

    async fn register_user(&self, new: NewUser) -> Result<User, PlannerError>;
}
