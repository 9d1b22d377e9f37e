//! Composition root: wires the database handle, the domain service and the
//! local client together.

use std::sync::Arc;

use planner_db::DbHandle;
use planner_sdk::PlannerClientV1;
use tracing::info;

use crate::config::PlannerConfig;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::{Migrator, PlannerUnitOfWork};
use crate::local_client::LocalPlannerClient;

/// A ready-to-use planner over one database.
#[derive(Clone)]
pub struct Planner {
    db: DbHandle,
    service: Arc<Service>,
}

impl Planner {
    /// Connect to the configured database and apply pending migrations.
    ///
    /// # Errors
    /// Returns an error if the connection or a migration fails.
    pub async fn init(config: &PlannerConfig) -> anyhow::Result<Self> {
        info!("Initializing planner");
        let db = config.database.connect().await?;
        let planner = Self::new(db, config.service.clone());
        planner.migrate().await?;
        Ok(planner)
    }

    /// Wrap an existing handle without touching the schema.
    #[must_use]
    pub fn new(db: DbHandle, config: ServiceConfig) -> Self {
        let service = Arc::new(Service::new(db.clone(), config));
        Self { db, service }
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns an error if any migration fails.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running planner database migrations");
        self.db.migrate::<Migrator>().await?;
        info!("Planner database migrations completed");
        Ok(())
    }

    #[must_use]
    pub fn db(&self) -> &DbHandle {
        &self.db
    }

    #[must_use]
    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }

    /// Client for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn PlannerClientV1> {
        Arc::new(LocalPlannerClient::new(Arc::clone(&self.service)))
    }

    /// Fresh unit of work over the planner tables.
    #[must_use]
    pub fn unit_of_work(&self) -> PlannerUnitOfWork {
        PlannerUnitOfWork::new(&self.db)
    }
}
