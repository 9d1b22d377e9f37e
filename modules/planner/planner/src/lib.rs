//! Planner Module
//!
//! Workspaces, projects and workspace items owned by users, stored through a
//! generic repository / unit-of-work layer.
//!
//! ## Public API
//!
//! The public API is defined in the `planner-sdk` crate and re-exported here:
//! - `PlannerClientV1` - trait for in-process consumers
//! - `Workspace`, `Project`, `WorkspaceItem`, `User` and their request types
//! - `PlannerError` - error type
//!
//! Build a [`Planner`] from configuration and hand out `planner.client()`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use planner_sdk::{
    ItemStatus, NewProject, NewUser, NewWorkspace, NewWorkspaceItem, OwnedProject,
    OwnedWorkspace, PlannerClientV1, PlannerError, Project, ProjectUpdate, ScopedWorkspaceItem,
    User, UserSummary, Workspace, WorkspaceItem, WorkspaceItemUpdate, WorkspaceUpdate,
};

pub mod config;
pub use config::{LoggingConfig, PlannerConfig};

// === MODULE DEFINITION ===
pub mod module;
pub use module::Planner;

// === LOCAL CLIENT ===
pub mod local_client;
pub use local_client::LocalPlannerClient;

// === INTERNAL MODULES ===
// Exposed for tests and the admin tooling; only the SDK types are a stable API.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
#[doc(hidden)]
pub mod test_support;

pub use domain::service::{Service, ServiceConfig};
pub use infra::storage::{Migrator, PlannerUnitOfWork, seed_default_users};
