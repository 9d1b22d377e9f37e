pub mod project;
pub mod user;
pub mod workspace;
pub mod workspace_item;
