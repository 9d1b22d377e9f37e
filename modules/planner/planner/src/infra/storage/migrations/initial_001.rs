use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

// No foreign keys: referential checks live in the domain service, and
// deleting a parent leaves its children in place.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r"
CREATE TABLE IF NOT EXISTS users (
    id VARCHAR(64) PRIMARY KEY NOT NULL,
    user_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    first_name VARCHAR(255),
    last_name VARCHAR(255)
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);

CREATE TABLE IF NOT EXISTS projects (
    id SERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    owner_id VARCHAR(64) NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_projects_owner_id ON projects(owner_id);

CREATE TABLE IF NOT EXISTS workspaces (
    id SERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    owner_id VARCHAR(64) NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_workspaces_owner_id ON workspaces(owner_id);

CREATE TABLE IF NOT EXISTS workspace_items (
    id SERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    priority INTEGER NOT NULL,
    status VARCHAR(32) NOT NULL DEFAULT 'NotStarted',
    workspace_id INTEGER NOT NULL,
    project_id INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_workspace_items_workspace_id ON workspace_items(workspace_id);
CREATE INDEX IF NOT EXISTS idx_workspace_items_project_id ON workspace_items(project_id);
                "
            }
            sea_orm::DatabaseBackend::MySql => {
                r"
CREATE TABLE IF NOT EXISTS users (
    id VARCHAR(64) PRIMARY KEY NOT NULL,
    user_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    first_name VARCHAR(255),
    last_name VARCHAR(255),
    UNIQUE KEY idx_users_email (email)
);

CREATE TABLE IF NOT EXISTS projects (
    id INT AUTO_INCREMENT PRIMARY KEY,
    created_at TIMESTAMP NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    owner_id VARCHAR(64) NOT NULL,
    KEY idx_projects_owner_id (owner_id)
);

CREATE TABLE IF NOT EXISTS workspaces (
    id INT AUTO_INCREMENT PRIMARY KEY,
    created_at TIMESTAMP NOT NULL,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    owner_id VARCHAR(64) NOT NULL,
    KEY idx_workspaces_owner_id (owner_id)
);

CREATE TABLE IF NOT EXISTS workspace_items (
    id INT AUTO_INCREMENT PRIMARY KEY,
    created_at TIMESTAMP NOT NULL,
    priority INT NOT NULL,
    status VARCHAR(32) NOT NULL DEFAULT 'NotStarted',
    workspace_id INT NOT NULL,
    project_id INT NOT NULL,
    KEY idx_workspace_items_workspace_id (workspace_id),
    KEY idx_workspace_items_project_id (project_id)
);
                "
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY NOT NULL,
    user_name TEXT NOT NULL,
    email TEXT NOT NULL,
    first_name TEXT,
    last_name TEXT
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    created_at TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    owner_id TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_projects_owner_id ON projects(owner_id);

CREATE TABLE IF NOT EXISTS workspaces (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    created_at TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    owner_id TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_workspaces_owner_id ON workspaces(owner_id);

CREATE TABLE IF NOT EXISTS workspace_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    created_at TEXT NOT NULL,
    priority INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'NotStarted',
    workspace_id INTEGER NOT NULL,
    project_id INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_workspace_items_workspace_id ON workspace_items(workspace_id);
CREATE INDEX IF NOT EXISTS idx_workspace_items_project_id ON workspace_items(project_id);
                "
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "
DROP TABLE IF EXISTS workspace_items;
DROP TABLE IF EXISTS workspaces;
DROP TABLE IF EXISTS projects;
DROP TABLE IF EXISTS users;
        ";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
