use planner_sdk::{
    ItemStatus, NewWorkspaceItem, ScopedWorkspaceItem, WorkspaceItem, WorkspaceItemUpdate,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, Set};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::{DomainError, Service, ensure_project_exists, ensure_workspace_exists};
use crate::infra::storage::entity::workspace_item;

/// Status for a new item: empty means `NotStarted`.
pub(super) fn status_for_create(raw: &str) -> Result<ItemStatus, DomainError> {
    if raw.is_empty() {
        return Ok(ItemStatus::NotStarted);
    }
    parse_status(raw)
}

/// Status for a replaced item: it must be given explicitly.
pub(super) fn status_for_update(raw: &str) -> Result<ItemStatus, DomainError> {
    if raw.is_empty() {
        warn!("Rejecting item update without status");
        return Err(DomainError::validation("status", "status is required"));
    }
    parse_status(raw)
}

fn parse_status(raw: &str) -> Result<ItemStatus, DomainError> {
    raw.parse::<ItemStatus>().map_err(|e| {
        warn!(status = raw, "Rejecting unknown item status");
        DomainError::validation("status", e.to_string())
    })
}

pub(super) async fn list_items(svc: &Service) -> Result<Vec<WorkspaceItem>, DomainError> {
    debug!("Listing workspace items");
    let rows = svc.uow().workspace_items.get_all().await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub(super) async fn get_item(svc: &Service, id: i32) -> Result<WorkspaceItem, DomainError> {
    debug!("Getting workspace item by id");
    svc.uow()
        .workspace_items
        .get_by_id(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| DomainError::not_found("WorkspaceItem", id))
}

pub(super) async fn list_workspace_items(
    svc: &Service,
    workspace_id: i32,
) -> Result<Vec<ScopedWorkspaceItem>, DomainError> {
    debug!("Listing items of workspace");
    let uow = svc.uow();
    ensure_workspace_exists(&uow, workspace_id).await?;

    let rows = uow.workspace_items.in_workspace(workspace_id).await?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let project = uow
            .projects
            .get_by_id(row.project_id)
            .await?
            .map(Into::into);
        out.push(ScopedWorkspaceItem {
            item: row.into(),
            project,
        });
    }

    debug!(count = out.len(), "Listed items of workspace");
    Ok(out)
}

pub(super) async fn create_item(
    svc: &Service,
    new: NewWorkspaceItem,
) -> Result<WorkspaceItem, DomainError> {
    info!("Creating workspace item");
    let uow = svc.uow();
    ensure_workspace_exists(&uow, new.workspace_id).await?;
    ensure_project_exists(&uow, new.project_id).await?;
    let status = status_for_create(&new.status)?;

    let pending = uow.workspace_items.add(workspace_item::ActiveModel {
        id: NotSet,
        created_at: Set(OffsetDateTime::now_utc()),
        priority: Set(new.priority),
        status: Set(status.into()),
        workspace_id: Set(new.workspace_id),
        project_id: Set(new.project_id),
    });
    if !uow.save().await? {
        return Err(DomainError::save_failed("WorkspaceItem"));
    }

    let created = pending
        .cloned()
        .ok_or_else(|| DomainError::save_failed("WorkspaceItem"))?;
    info!(item_id = created.id, "Workspace item created");
    Ok(created.into())
}

pub(super) async fn update_item(
    svc: &Service,
    id: i32,
    update: WorkspaceItemUpdate,
) -> Result<WorkspaceItem, DomainError> {
    info!("Updating workspace item");
    let uow = svc.uow();
    let existing = uow
        .workspace_items
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("WorkspaceItem", id))?;
    ensure_workspace_exists(&uow, update.workspace_id).await?;
    ensure_project_exists(&uow, update.project_id).await?;
    let status = status_for_update(&update.status)?;

    let replaced = workspace_item::Model {
        id,
        created_at: existing.created_at,
        priority: update.priority,
        status: status.into(),
        workspace_id: update.workspace_id,
        project_id: update.project_id,
    };
    uow.workspace_items
        .update(replaced.clone().into_active_model().reset_all());
    if !uow.save().await? {
        return Err(DomainError::save_failed("WorkspaceItem"));
    }

    info!("Workspace item updated");
    Ok(replaced.into())
}

pub(super) async fn delete_item(svc: &Service, id: i32) -> Result<WorkspaceItem, DomainError> {
    info!("Deleting workspace item");
    let uow = svc.uow();
    let existing = uow
        .workspace_items
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("WorkspaceItem", id))?;

    uow.workspace_items.delete(existing.clone());
    if !uow.save().await? {
        return Err(DomainError::save_failed("WorkspaceItem"));
    }

    info!("Workspace item deleted");
    Ok(existing.into())
}
