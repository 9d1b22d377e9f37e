//! Unit of work over the planner tables.

use planner_db::{DbError, DbHandle, Session};

use crate::infra::storage::repos::{
    ProjectRepository, UserRepository, WorkspaceItemRepository, WorkspaceRepository,
};

/// Repositories sharing one [`Session`], plus the single commit point for
/// everything they staged.
///
/// Create one per request. Dropping it discards whatever was not saved.
pub struct PlannerUnitOfWork {
    session: Session,
    pub workspaces: WorkspaceRepository,
    pub workspace_items: WorkspaceItemRepository,
    pub projects: ProjectRepository,
    pub users: UserRepository,
}

impl PlannerUnitOfWork {
    #[must_use]
    pub fn new(db: &DbHandle) -> Self {
        Self::with_session(db.session())
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            workspaces: WorkspaceRepository::new(session.clone()),
            workspace_items: WorkspaceItemRepository::new(session.clone()),
            projects: ProjectRepository::new(session.clone()),
            users: UserRepository::new(session.clone()),
            session,
        }
    }

    /// Commit staged changes; `true` iff at least one row changed.
    ///
    /// Nothing staged, or nothing the store reports as changed, is `Ok(false)`.
    ///
    /// # Errors
    /// Store faults propagate; the transaction is rolled back.
    pub async fn save(&self) -> Result<bool, DbError> {
        Ok(self.commit().await? > 0)
    }

    /// Commit staged changes and return the number of affected rows.
    ///
    /// # Errors
    /// Store faults propagate; the transaction is rolled back.
    pub async fn commit(&self) -> Result<u64, DbError> {
        self.session.commit().await
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.session.staged_len() > 0
    }
}
