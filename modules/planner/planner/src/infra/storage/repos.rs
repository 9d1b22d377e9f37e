//! Entity-specific repositories.
//!
//! Each wraps the generic [`Repository`] for its table (and derefs to it) and
//! adds the lookups the domain service needs. Owner and parent filters are
//! pushed to the store as predicates.

use std::ops::Deref;

use planner_db::{Condition, DbError, Repository, Session};
use sea_orm::sea_query::Expr;

use crate::infra::storage::entity::{project, user, workspace, workspace_item};

pub struct WorkspaceRepository(Repository<workspace::Entity>);

impl WorkspaceRepository {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(Repository::new(session))
    }

    /// Workspaces whose `owner_id` equals `owner_id`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn owned_by(&self, owner_id: &str) -> Result<Vec<workspace::Model>, DbError> {
        self.get_some(Condition::all().add(Expr::col(workspace::Column::OwnerId).eq(owner_id)))
            .await
    }
}

impl Deref for WorkspaceRepository {
    type Target = Repository<workspace::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct ProjectRepository(Repository<project::Entity>);

impl ProjectRepository {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(Repository::new(session))
    }

    /// Projects whose `owner_id` equals `owner_id`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn owned_by(&self, owner_id: &str) -> Result<Vec<project::Model>, DbError> {
        self.get_some(Condition::all().add(Expr::col(project::Column::OwnerId).eq(owner_id)))
            .await
    }
}

impl Deref for ProjectRepository {
    type Target = Repository<project::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct WorkspaceItemRepository(Repository<workspace_item::Entity>);

impl WorkspaceItemRepository {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(Repository::new(session))
    }

    /// Items of one workspace, in store order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn in_workspace(
        &self,
        workspace_id: i32,
    ) -> Result<Vec<workspace_item::Model>, DbError> {
        self.get_some(
            Condition::all().add(Expr::col(workspace_item::Column::WorkspaceId).eq(workspace_id)),
        )
        .await
    }
}

impl Deref for WorkspaceItemRepository {
    type Target = Repository<workspace_item::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct UserRepository(Repository<user::Entity>);

impl UserRepository {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self(Repository::new(session))
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, DbError> {
        let mut found = self
            .get_some(Condition::all().add(Expr::col(user::Column::Email).eq(email)))
            .await?;
        Ok(found.pop())
    }

    /// Whether a user row with this id exists.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn exists_by_id(&self, id: &str) -> Result<bool, DbError> {
        self.exists(Condition::all().add(Expr::col(user::Column::Id).eq(id)))
            .await
    }
}

impl Deref for UserRepository {
    type Target = Repository<user::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
