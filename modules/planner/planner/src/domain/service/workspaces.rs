use planner_sdk::{NewWorkspace, OwnedWorkspace, UserSummary, Workspace, WorkspaceUpdate};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, Set};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::{DomainError, Service, ensure_user_exists};
use crate::infra::storage::entity::workspace;

pub(super) async fn list_workspaces(svc: &Service) -> Result<Vec<Workspace>, DomainError> {
    debug!("Listing workspaces");
    let rows = svc.uow().workspaces.get_all().await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub(super) async fn get_workspace(svc: &Service, id: i32) -> Result<Workspace, DomainError> {
    debug!("Getting workspace by id");
    svc.uow()
        .workspaces
        .get_by_id(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| DomainError::not_found("Workspace", id))
}

pub(super) async fn list_user_workspaces(
    svc: &Service,
    owner_id: &str,
) -> Result<Vec<OwnedWorkspace>, DomainError> {
    debug!("Listing workspaces of user");
    let uow = svc.uow();
    ensure_user_exists(&uow, owner_id).await?;

    let rows = uow.workspaces.owned_by(owner_id).await?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let owner = uow
            .users
            .get_by_id(row.owner_id.clone())
            .await?
            .map(UserSummary::from);
        out.push(OwnedWorkspace {
            workspace: row.into(),
            owner,
        });
    }

    debug!(count = out.len(), "Listed workspaces of user");
    Ok(out)
}

pub(super) async fn create_workspace(
    svc: &Service,
    new: NewWorkspace,
) -> Result<Workspace, DomainError> {
    info!("Creating workspace");
    svc.validate_name("name", &new.name)?;
    svc.validate_description(new.description.as_deref())?;

    let uow = svc.uow();
    ensure_user_exists(&uow, &new.owner_id).await?;

    let pending = uow.workspaces.add(workspace::ActiveModel {
        id: NotSet,
        created_at: Set(OffsetDateTime::now_utc()),
        name: Set(new.name),
        description: Set(new.description),
        owner_id: Set(new.owner_id),
    });
    if !uow.save().await? {
        return Err(DomainError::save_failed("Workspace"));
    }

    let created = pending
        .cloned()
        .ok_or_else(|| DomainError::save_failed("Workspace"))?;
    info!(workspace_id = created.id, "Workspace created");
    Ok(created.into())
}

pub(super) async fn update_workspace(
    svc: &Service,
    id: i32,
    update: WorkspaceUpdate,
) -> Result<Workspace, DomainError> {
    info!("Updating workspace");
    svc.validate_name("name", &update.name)?;
    svc.validate_description(update.description.as_deref())?;

    let uow = svc.uow();
    let existing = uow
        .workspaces
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Workspace", id))?;
    ensure_user_exists(&uow, &update.owner_id).await?;

    let replaced = workspace::Model {
        id,
        created_at: existing.created_at,
        name: update.name,
        description: update.description,
        owner_id: update.owner_id,
    };
    uow.workspaces
        .update(replaced.clone().into_active_model().reset_all());
    if !uow.save().await? {
        return Err(DomainError::save_failed("Workspace"));
    }

    info!("Workspace updated");
    Ok(replaced.into())
}

pub(super) async fn delete_workspace(svc: &Service, id: i32) -> Result<Workspace, DomainError> {
    info!("Deleting workspace");
    let uow = svc.uow();
    let existing = uow
        .workspaces
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Workspace", id))?;

    uow.workspaces.delete(existing.clone());
    if !uow.save().await? {
        return Err(DomainError::save_failed("Workspace"));
    }

    info!("Workspace deleted; its items are left in place");
    Ok(existing.into())
}
