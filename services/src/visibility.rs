//! Which students of a module an actor is allowed to see.

use db::models::user_module_role::{self, Role};
use sea_orm::{DatabaseConnection, DbErr};

use crate::policy::Actor;

/// IDs of the students in `module_id` visible to `actor`, ascending.
///
/// Admins and staff see every student; a student sees only themselves;
/// anybody else sees nobody.
pub async fn students_visible_to(
    db: &DatabaseConnection,
    module_id: i64,
    actor: Actor,
) -> Result<Vec<i64>, DbErr> {
    let role = if actor.admin {
        None
    } else {
        match user_module_role::Model::get_role(db, actor.id, module_id).await? {
            Some(role) => Some(role),
            None => return Ok(Vec::new()),
        }
    };

    match role {
        Some(Role::Student) => Ok(vec![actor.id]),
        _ => user_module_role::Model::user_ids_with_role(db, module_id, Role::Student).await,
    }
}

/// Whether `user_id` is among the students visible to `actor`.
pub async fn is_student_visible_to(
    db: &DatabaseConnection,
    module_id: i64,
    actor: Actor,
    user_id: i64,
) -> Result<bool, DbErr> {
    Ok(students_visible_to(db, module_id, actor)
        .await?
        .contains(&user_id))
}
