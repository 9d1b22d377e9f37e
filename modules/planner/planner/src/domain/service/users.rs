use planner_db::DbError;
use planner_sdk::{NewUser, User};
use sea_orm::{Set, SqlErr};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{DomainError, Service};
use crate::infra::storage::entity::user;

pub(super) async fn get_user(svc: &Service, id: &str) -> Result<User, DomainError> {
    debug!("Getting user by id");
    svc.uow()
        .users
        .get_by_id(id.to_owned())
        .await?
        .map(Into::into)
        .ok_or_else(|| DomainError::not_found("User", id))
}

pub(super) async fn register_user(svc: &Service, new: NewUser) -> Result<User, DomainError> {
    info!("Registering user");
    svc.validate_name("user_name", &new.user_name)?;
    validate_email(&new.email)?;

    let uow = svc.uow();
    if let Some(id) = new.id.as_deref() {
        if id.trim().is_empty() {
            return Err(DomainError::validation("id", "must not be empty"));
        }
        if uow.users.exists_by_id(id).await? {
            warn!(user_id = %id, "Rejecting duplicate user id");
            return Err(DomainError::validation("id", "User with this ID already exists"));
        }
    }
    if uow.users.find_by_email(&new.email).await?.is_some() {
        warn!("Rejecting duplicate email");
        return Err(DomainError::validation("email", "email is already registered"));
    }

    let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let pending = uow.users.add(user::ActiveModel {
        id: Set(id),
        user_name: Set(new.user_name),
        email: Set(new.email),
        first_name: Set(new.first_name),
        last_name: Set(new.last_name),
    });
    // The checks above race with concurrent registrations; the unique
    // indexes have the final word.
    if !uow.save().await.map_err(duplicate_to_validation)? {
        return Err(DomainError::save_failed("User"));
    }

    let created = pending
        .cloned()
        .ok_or_else(|| DomainError::save_failed("User"))?;
    info!(user_id = %created.id, "User registered");
    Ok(created.into())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::validation("email", "must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(DomainError::validation("email", "not a valid email address"));
    }
    Ok(())
}

/// A unique-index violation at commit means another registration won the race.
pub(super) fn duplicate_to_validation(err: DbError) -> DomainError {
    if let DbError::Sea(db_err) = &err
        && let Some(SqlErr::UniqueConstraintViolation(msg)) = db_err.sql_err()
    {
        warn!(error = %msg, "Registration lost a uniqueness race");
        return if msg.contains("email") {
            DomainError::validation("email", "email is already registered")
        } else {
            DomainError::validation("id", "User with this ID already exists")
        };
    }
    err.into()
}
