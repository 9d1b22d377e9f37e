//! Planner SDK
//!
//! This crate provides the public API for the planner module:
//! - `PlannerClientV1` trait for in-process consumers
//! - Model types (`Workspace`, `Project`, `WorkspaceItem`, `User`, ...)
//! - Error type (`PlannerError`)
//!
//! ```ignore
//! let client: Arc<dyn PlannerClientV1> = planner.client();
//! let items = client.list_workspace_items(workspace_id).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::PlannerClientV1;
pub use errors::PlannerError;
pub use models::{
    ItemStatus, NewProject, NewUser, NewWorkspace, NewWorkspaceItem, OwnedProject,
    OwnedWorkspace, ParseItemStatusError, Project, ProjectUpdate, ScopedWorkspaceItem, User,
    UserSummary, Workspace, WorkspaceItem, WorkspaceItemUpdate, WorkspaceUpdate,
};
