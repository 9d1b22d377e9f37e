use planner_sdk::{NewProject, OwnedProject, Project, ProjectUpdate, UserSummary};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, Set};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::{DomainError, Service, ensure_user_exists};
use crate::infra::storage::entity::project;

pub(super) async fn list_projects(svc: &Service) -> Result<Vec<Project>, DomainError> {
    debug!("Listing projects");
    let rows = svc.uow().projects.get_all().await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub(super) async fn get_project(svc: &Service, id: i32) -> Result<Project, DomainError> {
    debug!("Getting project by id");
    svc.uow()
        .projects
        .get_by_id(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| DomainError::not_found("Project", id))
}

pub(super) async fn list_user_projects(
    svc: &Service,
    owner_id: &str,
) -> Result<Vec<OwnedProject>, DomainError> {
    debug!("Listing projects of user");
    let uow = svc.uow();
    ensure_user_exists(&uow, owner_id).await?;

    let rows = uow.projects.owned_by(owner_id).await?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let owner = uow
            .users
            .get_by_id(row.owner_id.clone())
            .await?
            .map(UserSummary::from);
        out.push(OwnedProject {
            project: row.into(),
            owner,
        });
    }

    debug!(count = out.len(), "Listed projects of user");
    Ok(out)
}

pub(super) async fn create_project(
    svc: &Service,
    new: NewProject,
) -> Result<Project, DomainError> {
    info!("Creating project");
    svc.validate_name("name", &new.name)?;
    svc.validate_description(new.description.as_deref())?;

    let uow = svc.uow();
    ensure_user_exists(&uow, &new.owner_id).await?;

    let pending = uow.projects.add(project::ActiveModel {
        id: NotSet,
        created_at: Set(OffsetDateTime::now_utc()),
        name: Set(new.name),
        description: Set(new.description),
        owner_id: Set(new.owner_id),
    });
    if !uow.save().await? {
        return Err(DomainError::save_failed("Project"));
    }

    let created = pending
        .cloned()
        .ok_or_else(|| DomainError::save_failed("Project"))?;
    info!(project_id = created.id, "Project created");
    Ok(created.into())
}

pub(super) async fn update_project(
    svc: &Service,
    id: i32,
    update: ProjectUpdate,
) -> Result<Project, DomainError> {
    info!("Updating project");
    svc.validate_name("name", &update.name)?;
    svc.validate_description(update.description.as_deref())?;

    let uow = svc.uow();
    let existing = uow
        .projects
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Project", id))?;
    ensure_user_exists(&uow, &update.owner_id).await?;

    let replaced = project::Model {
        id,
        created_at: existing.created_at,
        name: update.name,
        description: update.description,
        owner_id: update.owner_id,
    };
    uow.projects
        .update(replaced.clone().into_active_model().reset_all());
    if !uow.save().await? {
        return Err(DomainError::save_failed("Project"));
    }

    info!("Project updated");
    Ok(replaced.into())
}

pub(super) async fn delete_project(svc: &Service, id: i32) -> Result<Project, DomainError> {
    info!("Deleting project");
    let uow = svc.uow();
    let existing = uow
        .projects
        .get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Project", id))?;

    uow.projects.delete(existing.clone());
    if !uow.save().await? {
        return Err(DomainError::save_failed("Project"));
    }

    info!("Project deleted; items referencing it are left in place");
    Ok(existing.into())
}
