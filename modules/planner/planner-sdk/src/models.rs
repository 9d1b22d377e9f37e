//! Public models for the planner module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the planner module and its consumers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::OffsetDateTime;

/// Progress state of a workspace item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStatus {
    #[default]
    NotStarted,
    Started,
    OnHold,
    Completed,
    Canceled,
    UnderRevision,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 6] = [
        ItemStatus::NotStarted,
        ItemStatus::Started,
        ItemStatus::OnHold,
        ItemStatus::Completed,
        ItemStatus::Canceled,
        ItemStatus::UnderRevision,
    ];

    /// Canonical name, as stored.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "NotStarted",
            ItemStatus::Started => "Started",
            ItemStatus::OnHold => "OnHold",
            ItemStatus::Completed => "Completed",
            ItemStatus::Canceled => "Canceled",
            ItemStatus::UnderRevision => "UnderRevision",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string that names none of the known states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item status '{0}'")]
pub struct ParseItemStatusError(pub String);

impl FromStr for ItemStatus {
    type Err = ParseItemStatusError;

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseItemStatusError(s.to_owned()))
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Data for registering a user. A missing id is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<String>,
    pub user_name: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Owner view attached to owner-scoped results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            user_name: u.user_name,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

/// A workspace entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: i32,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// Data for creating a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkspace {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// Full replacement data for a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceUpdate {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// A workspace with its owner resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedWorkspace {
    pub workspace: Workspace,
    pub owner: Option<UserSummary>,
}

/// A project entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// Data for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// Full replacement data for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// A project with its owner resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedProject {
    pub project: Project,
    pub owner: Option<UserSummary>,
}

/// A unit of work inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceItem {
    pub id: i32,
    pub created_at: OffsetDateTime,
    pub priority: i32,
    pub status: ItemStatus,
    pub workspace_id: i32,
    pub project_id: i32,
}

/// Data for creating an item.
///
/// `status` is the raw status name; an empty string means `NotStarted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkspaceItem {
    pub priority: i32,
    pub status: String,
    pub workspace_id: i32,
    pub project_id: i32,
}

/// Full replacement data for an item. `status` must name a known state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceItemUpdate {
    pub priority: i32,
    pub status: String,
    pub workspace_id: i32,
    pub project_id: i32,
}

/// An item with its project resolved. The project is `None` when it has
/// been deleted since the item was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedWorkspaceItem {
    pub item: WorkspaceItem,
    pub project: Option<Project>,
}
