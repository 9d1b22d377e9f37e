//! Demo identities for local development.

use planner_db::DbError;
use sea_orm::Set;
use tracing::{debug, info};
use uuid::Uuid;

use crate::infra::storage::entity::user;
use crate::infra::storage::unit_of_work::PlannerUnitOfWork;

struct DefaultUser {
    user_name: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
}

const DEFAULT_USERS: [DefaultUser; 2] = [
    DefaultUser {
        user_name: "Admin_UserName",
        email: "admin@example.com",
        first_name: "Admin_F",
        last_name: "Admin_L",
    },
    DefaultUser {
        user_name: "AppUser_UserName",
        email: "appuser@example.com",
        first_name: "AppUser_F",
        last_name: "AppUser_L",
    },
];

/// Insert the default demo users that are not present yet, matched by email.
///
/// Returns the number of users created; running it twice creates nothing the
/// second time.
///
/// # Errors
/// Returns an error if the lookup or the commit fails.
pub async fn seed_default_users(uow: &PlannerUnitOfWork) -> Result<u64, DbError> {
    for u in &DEFAULT_USERS {
        if uow.users.find_by_email(u.email).await?.is_some() {
            debug!(email = u.email, "default user already present");
            continue;
        }
        uow.users.add(user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_name: Set(u.user_name.to_owned()),
            email: Set(u.email.to_owned()),
            first_name: Set(Some(u.first_name.to_owned())),
            last_name: Set(Some(u.last_name.to_owned())),
        });
    }

    let created = uow.commit().await?;
    info!(created, "default users seeded");
    Ok(created)
}
