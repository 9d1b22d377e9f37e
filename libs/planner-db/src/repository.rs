//! Generic per-entity repository.
//!
//! Reads run against the session connection and observe committed state.
//! Mutations are staged on the session and reach the store only when the
//! session commits.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
};
use tracing::debug;

use crate::Result;
use crate::session::{Applied, Pending, Session, StagedChange};

/// Repository over one entity type, bound to a [`Session`].
pub struct Repository<E> {
    session: Session,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("table", &table_name::<E>())
            .field("session", &self.session)
            .finish()
    }
}

fn table_name<E: EntityTrait>() -> String {
    E::default().table_name().to_owned()
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    /// Session this repository stages into.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Every stored row, in store order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_all(&self) -> Result<Vec<E::Model>> {
        debug!(table = %table_name::<E>(), "get_all");
        Ok(E::find().all(self.session.conn()).await?)
    }

    /// Row with the given primary key, if any.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_by_id<K>(&self, id: K) -> Result<Option<E::Model>>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Ok(E::find_by_id(id).one(self.session.conn()).await?)
    }

    /// Whether at least one stored row matches `predicate`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn exists(&self, predicate: Condition) -> Result<bool> {
        let n = E::find()
            .filter(predicate)
            .count(self.session.conn())
            .await?;
        Ok(n > 0)
    }

    /// Every stored row matching `predicate`, in store order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_some(&self, predicate: Condition) -> Result<Vec<E::Model>> {
        debug!(table = %table_name::<E>(), "get_some");
        Ok(E::find()
            .filter(predicate)
            .all(self.session.conn())
            .await?)
    }

    /// Stage an insert. The returned handle resolves to the stored row after commit.
    pub fn add(&self, entity: E::ActiveModel) -> Pending<E::Model> {
        let pending = Pending::new();
        self.session.stage(Box::new(Insert::<E> {
            model: entity,
            slot: pending.slot(),
        }));
        pending
    }

    /// Stage a full update of the row identified by the model's primary key.
    ///
    /// A row that no longer exists at commit time contributes zero affected rows.
    pub fn update(&self, entity: E::ActiveModel) {
        self.session.stage(Box::new(Update::<E> { model: entity }));
    }

    /// Stage a delete of the row identified by the model's primary key.
    pub fn delete(&self, entity: E::Model) {
        self.session.stage(Box::new(Delete::<E> {
            model: entity.into_active_model(),
        }));
    }
}

struct Insert<E: EntityTrait> {
    model: E::ActiveModel,
    slot: Arc<OnceLock<E::Model>>,
}

#[async_trait]
impl<E> StagedChange for Insert<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    fn describe(&self) -> String {
        format!("insert {}", table_name::<E>())
    }

    async fn apply(self: Box<Self>, tx: &DatabaseTransaction) -> std::result::Result<Applied, DbErr> {
        let Self { model, slot } = *self;
        let stored = model.insert(tx).await?;
        Ok(Applied {
            rows: 1,
            on_commit: Some(Box::new(move || {
                // A slot is only ever filled once, by the commit that owns it.
                let _ignored = slot.set(stored);
            })),
        })
    }
}

struct Update<E: EntityTrait> {
    model: E::ActiveModel,
}

#[async_trait]
impl<E> StagedChange for Update<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    fn describe(&self) -> String {
        format!("update {}", table_name::<E>())
    }

    async fn apply(self: Box<Self>, tx: &DatabaseTransaction) -> std::result::Result<Applied, DbErr> {
        match self.model.update(tx).await {
            Ok(_) => Ok(Applied::rows(1)),
            Err(DbErr::RecordNotUpdated) => Ok(Applied::rows(0)),
            Err(err) => Err(err),
        }
    }
}

struct Delete<E: EntityTrait> {
    model: E::ActiveModel,
}

#[async_trait]
impl<E> StagedChange for Delete<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    fn describe(&self) -> String {
        format!("delete {}", table_name::<E>())
    }

    async fn apply(self: Box<Self>, tx: &DatabaseTransaction) -> std::result::Result<Applied, DbErr> {
        let res = self.model.delete(tx).await?;
        Ok(Applied::rows(res.rows_affected))
    }
}
