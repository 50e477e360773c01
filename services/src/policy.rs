//! Capability checks for custom gradebook columns and their data.
//!
//! Every check takes the acting user and the resource and answers allow/deny.
//! Admins are allowed everything. Otherwise column rights come from the
//! actor's role in the column's module, and datum rights are derived from the
//! column.

use db::models::{custom_gradebook_column, user_module_role};
use sea_orm::{DatabaseConnection, DbErr};

/// The authenticated caller, as far as authorization is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAction {
    Read,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatumAction {
    Update,
}

/// A datum addressed by its column and owner; it may not be persisted yet.
#[derive(Debug, Clone, Copy)]
pub struct DatumRef<'a> {
    pub column: &'a custom_gradebook_column::Model,
    pub user_id: i64,
}

/// Whether `actor` may perform `action` on `column`.
///
/// Reading and managing both require grade-level access to the module:
/// lecturer, assistant lecturer or tutor.
pub async fn can_on_column(
    db: &DatabaseConnection,
    actor: Actor,
    column: &custom_gradebook_column::Model,
    action: ColumnAction,
) -> Result<bool, DbErr> {
    if actor.admin {
        return Ok(true);
    }

    let role = user_module_role::Model::get_role(db, actor.id, column.module_id).await?;
    let allowed = role.is_some_and(|r| r.is_staff());

    if !allowed {
        tracing::debug!(
            actor = actor.id,
            column_id = column.id,
            ?action,
            ?role,
            "Column access denied"
        );
    }
    Ok(allowed)
}

/// Whether `actor` may perform `action` on the datum.
pub async fn can_on_datum(
    db: &DatabaseConnection,
    actor: Actor,
    datum: DatumRef<'_>,
    action: DatumAction,
) -> Result<bool, DbErr> {
    match action {
        DatumAction::Update => can_on_column(db, actor, datum.column, ColumnAction::Manage).await,
    }
}
