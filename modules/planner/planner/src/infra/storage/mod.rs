//! Infrastructure storage layer.
//!
//! All `SeaORM`-specific code lives here:
//! - `entity/` - entity definitions for `users`, `projects`, `workspaces`, `workspace_items`
//! - `mapper.rs` - conversions between entity models and SDK contract types
//! - `migrations/` - schema migrations
//! - `repos.rs` - per-entity repositories over the generic `planner_db::Repository`
//! - `unit_of_work.rs` - `PlannerUnitOfWork`, the single commit point per request
//! - `seed.rs` - default demo users

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repos;
pub mod seed;
pub mod unit_of_work;

pub use migrations::Migrator;
pub use seed::seed_default_users;
pub use unit_of_work::PlannerUnitOfWork;
