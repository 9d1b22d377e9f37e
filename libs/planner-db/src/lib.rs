#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Planner database access layer.
//!
//! This crate wraps a `SeaORM` connection with two primitives used by the
//! planner module:
//!
//! - [`Repository`]: a generic, per-entity repository. Reads go straight to the
//!   store and observe committed state; `add`, `update` and `delete` only stage
//!   a change.
//! - [`Session`]: the staged-change log shared by every repository created from
//!   it. [`Session::commit`] applies the log inside one transaction.
//!
//! # Features
//! - `pg`, `mysql`, `sqlite`: enable the matching `SeaORM` / `SQLx` backend
//!
//! # Example
//! ```rust,no_run
//! use planner_db::{ConnectOpts, DbHandle};
//!
//! # async fn demo() -> planner_db::Result<()> {
//! let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default()).await?;
//! let session = db.session();
//! assert_eq!(session.staged_len(), 0);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(
    not(any(feature = "pg", feature = "mysql", feature = "sqlite")),
    allow(unused_imports, unused_variables, dead_code, unreachable_code)
)]

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;
use tracing::{debug, info};

pub use sea_orm::ConnectionTrait as DbConnTrait;
pub use sea_orm::{Condition, DbErr};

pub mod options;
pub mod repository;
pub mod session;

pub use options::{DbConfig, redact_credentials_in_dsn};
pub use repository::Repository;
pub use session::{Pending, Session};

/// Library-local result type.
pub type Result<T> = std::result::Result<T, DbError>;

/// Typed error for the DB handle and the unit-of-work primitives.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Unknown DSN: {0}")]
    UnknownDsn(String),

    #[error("Feature not enabled: {0}")]
    FeatureDisabled(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Sea(#[from] DbErr),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Supported engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbEngine {
    Postgres,
    MySql,
    Sqlite,
}

impl DbEngine {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DbEngine::Postgres => "postgres",
            DbEngine::MySql => "mysql",
            DbEngine::Sqlite => "sqlite",
        }
    }
}

/// Connection pool knobs; each driver applies the subset it supports.
#[derive(Clone, Debug)]
pub struct ConnectOpts {
    /// Maximum number of connections in the pool.
    pub max_conns: Option<u32>,
    /// Minimum number of connections in the pool.
    pub min_conns: Option<u32>,
    /// Timeout to acquire a connection from the pool.
    pub acquire_timeout: Option<Duration>,
    /// Idle timeout before a connection is closed.
    pub idle_timeout: Option<Duration>,
    /// Log every statement through `SQLx` at debug level.
    pub sqlx_logging: bool,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            max_conns: Some(10),
            min_conns: None,
            acquire_timeout: Some(Duration::from_secs(30)),
            idle_timeout: None,
            sqlx_logging: false,
        }
    }
}

/// Main handle: an open pool plus the engine it talks to.
#[derive(Debug, Clone)]
pub struct DbHandle {
    engine: DbEngine,
    dsn: String,
    sea: DatabaseConnection,
}

impl DbHandle {
    /// Detect engine by DSN.
    ///
    /// Only the scheme prefix is inspected; the tail (credentials etc.) is left alone.
    ///
    /// # Errors
    /// Returns `DbError::UnknownDsn` if the DSN scheme is not recognized.
    pub fn detect(dsn: &str) -> Result<DbEngine> {
        let s = dsn.trim_start();

        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            Ok(DbEngine::Postgres)
        } else if s.starts_with("mysql://") {
            Ok(DbEngine::MySql)
        } else if s.starts_with("sqlite:") {
            Ok(DbEngine::Sqlite)
        } else {
            Err(DbError::UnknownDsn(dsn.to_owned()))
        }
    }

    /// Connect and build handle.
    ///
    /// In-memory `SQLite` databases live inside a single connection, so the
    /// pool is pinned to one connection that is never recycled.
    ///
    /// # Errors
    /// Returns an error if the DSN is unknown, its backend is not compiled in,
    /// or the connection fails.
    pub async fn connect(dsn: &str, opts: ConnectOpts) -> Result<Self> {
        let engine = Self::detect(dsn)?;
        ensure_backend_enabled(engine)?;

        let dsn = dsn.trim_start().to_owned();
        let is_memory = engine == DbEngine::Sqlite && is_memory_dsn(&dsn);

        let mut o = ConnectOptions::new(dsn.clone());
        o.sqlx_logging(opts.sqlx_logging);
        if let Some(t) = opts.acquire_timeout {
            o.acquire_timeout(t);
        }
        if is_memory {
            o.max_connections(1).min_connections(1);
        } else {
            if let Some(n) = opts.max_conns {
                o.max_connections(n);
            }
            if let Some(n) = opts.min_conns {
                o.min_connections(n);
            }
            if let Some(t) = opts.idle_timeout {
                o.idle_timeout(t);
            }
        }

        let sea = Database::connect(o).await?;
        info!(
            engine = engine.as_str(),
            dsn = %redact_credentials_in_dsn(&dsn),
            "database connected"
        );

        Ok(Self { engine, dsn, sea })
    }

    /// Graceful pool close. Dropping the handle also closes it; this just makes it explicit.
    ///
    /// # Errors
    /// Returns an error if the driver fails while closing the pool.
    pub async fn close(self) -> Result<()> {
        self.sea.close().await?;
        Ok(())
    }

    /// Get the backend.
    #[must_use]
    pub fn engine(&self) -> DbEngine {
        self.engine
    }

    /// Get the DSN used for this connection.
    #[must_use]
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Borrow the underlying `SeaORM` connection.
    #[must_use]
    pub fn sea(&self) -> &DatabaseConnection {
        &self.sea
    }

    /// Open a fresh session with an empty staged-change log.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.sea.clone())
    }

    /// Apply every pending migration of `M`.
    ///
    /// # Errors
    /// Returns an error if any migration fails.
    pub async fn migrate<M: MigratorTrait>(&self) -> Result<()> {
        debug!(engine = self.engine.as_str(), "running migrations");
        M::up(&self.sea, None).await?;
        info!("migrations applied");
        Ok(())
    }

    /// Names of migrations of `M` that have not been applied yet.
    ///
    /// # Errors
    /// Returns an error if the migration table cannot be read.
    pub async fn pending_migrations<M: MigratorTrait>(&self) -> Result<Vec<String>> {
        let pending = M::get_pending_migrations(&self.sea).await?;
        Ok(pending.iter().map(|m| m.name().to_owned()).collect())
    }

    /// Round-trip a trivial statement to verify the connection is alive.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable.
    pub async fn ping(&self) -> Result<()> {
        self.sea.ping().await?;
        Ok(())
    }
}

fn ensure_backend_enabled(engine: DbEngine) -> Result<()> {
    match engine {
        #[cfg(feature = "pg")]
        DbEngine::Postgres => Ok(()),
        #[cfg(not(feature = "pg"))]
        DbEngine::Postgres => Err(DbError::FeatureDisabled("PostgreSQL feature not enabled")),
        #[cfg(feature = "mysql")]
        DbEngine::MySql => Ok(()),
        #[cfg(not(feature = "mysql"))]
        DbEngine::MySql => Err(DbError::FeatureDisabled("MySQL feature not enabled")),
        #[cfg(feature = "sqlite")]
        DbEngine::Sqlite => Ok(()),
        #[cfg(not(feature = "sqlite"))]
        DbEngine::Sqlite => Err(DbError::FeatureDisabled("SQLite feature not enabled")),
    }
}

fn is_memory_dsn(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}
