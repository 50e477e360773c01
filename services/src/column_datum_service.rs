//! Listing and updating the per-student values of a custom gradebook column.
//!
//! Both operations resolve the module first, then the column, and check
//! authorization before touching any data. Check order for updates:
//! module → visible student → active column → datum lookup → authorization.

use db::models::{custom_gradebook_column, custom_gradebook_column_datum, module};
use db::repositories::column_datum_repository::ColumnDatumRepository;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde::Serialize;
use util::paginate::{PageInfo, Pagination};

use crate::error::ServiceError;
use crate::policy::{self, Actor, ColumnAction, DatumAction, DatumRef};
use crate::validation::{self, FieldErrors};
use crate::visibility;

/// Wire representation of a datum: `{"content": "...", "user_id": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDatumJson {
    pub content: Option<String>,
    pub user_id: i64,
}

impl From<&custom_gradebook_column_datum::Model> for ColumnDatumJson {
    fn from(datum: &custom_gradebook_column_datum::Model) -> Self {
        Self {
            content: Some(datum.content.clone()),
            user_id: datum.user_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnDataPage {
    pub data: Vec<ColumnDatumJson>,
    pub page: PageInfo,
}

#[derive(Debug, Clone)]
pub struct UpdateColumnDatum {
    pub module_id: i64,
    pub column_id: i64,
    pub user_id: i64,
    /// `None` leaves the current content untouched.
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Content was created or changed.
    Saved(ColumnDatumJson),
    /// Content was blank; the datum (if any) no longer exists.
    Deleted(ColumnDatumJson),
    /// Nothing was written.
    Invalid(FieldErrors),
}

pub struct ColumnDatumService;

impl ColumnDatumService {
    /// A page of the column's data for the students `actor` can see.
    ///
    /// Students without a datum are not listed.
    pub async fn list(
        db: &DatabaseConnection,
        actor: Actor,
        module_id: i64,
        column_id: i64,
        pagination: Pagination,
    ) -> Result<ColumnDataPage, ServiceError> {
        require_module(db, module_id).await?;
        let column = require_active_column(db, module_id, column_id).await?;

        if !policy::can_on_column(db, actor, &column, ColumnAction::Read).await? {
            return Err(ServiceError::forbidden(
                "You do not have permission to view this column",
            ));
        }

        let visible = visibility::students_visible_to(db, module_id, actor).await?;
        let (rows, total) =
            ColumnDatumRepository::page_for_users(db, column.id, &visible, pagination).await?;

        Ok(ColumnDataPage {
            data: rows.iter().map(ColumnDatumJson::from).collect(),
            page: PageInfo::new(pagination, total),
        })
    }

    /// Sets, replaces or clears one student's value in a column.
    pub async fn update(
        db: &DatabaseConnection,
        actor: Actor,
        params: UpdateColumnDatum,
    ) -> Result<UpdateOutcome, ServiceError> {
        let UpdateColumnDatum {
            module_id,
            column_id,
            user_id,
            content,
        } = params;

        require_module(db, module_id).await?;

        if !visibility::is_student_visible_to(db, module_id, actor, user_id).await? {
            return Err(ServiceError::not_found("User not found"));
        }

        let column = require_active_column(db, module_id, column_id).await?;
        let existing = ColumnDatumRepository::find_by_column_and_user(db, column.id, user_id).await?;

        let datum_ref = DatumRef {
            column: &column,
            user_id,
        };
        if !policy::can_on_datum(db, actor, datum_ref, DatumAction::Update).await? {
            return Err(ServiceError::forbidden(
                "You do not have permission to update this column",
            ));
        }

        let content = content.or_else(|| existing.as_ref().map(|d| d.content.clone()));

        if validation::is_blank(content.as_deref()) {
            if let Some(datum) = existing {
                ColumnDatumRepository::delete(db, datum).await?;
                tracing::info!(actor = actor.id, column_id, user_id, "Column datum deleted");
            }
            return Ok(UpdateOutcome::Deleted(ColumnDatumJson { content, user_id }));
        }

        // Not blank, so present.
        let content = content.unwrap_or_default();
        if let Err(errors) = validation::validate_content(&content) {
            return Ok(UpdateOutcome::Invalid(errors));
        }

        save(db, actor, existing, column.id, user_id, &content).await
    }
}

/// Persists validated content. `existing` is whatever the lookup saw, so a
/// row inserted since then surfaces as a `user_id` uniqueness error.
async fn save(
    db: &DatabaseConnection,
    actor: Actor,
    existing: Option<custom_gradebook_column_datum::Model>,
    column_id: i64,
    user_id: i64,
    content: &str,
) -> Result<UpdateOutcome, ServiceError> {
    match ColumnDatumRepository::upsert(db, existing, column_id, user_id, content).await {
        Ok(saved) => {
            tracing::info!(actor = actor.id, column_id, user_id, "Column datum saved");
            Ok(UpdateOutcome::Saved(ColumnDatumJson::from(&saved)))
        }
        Err(err) if is_unique_violation(&err) => {
            tracing::warn!(column_id, user_id, "Concurrent insert for column datum");
            Ok(UpdateOutcome::Invalid(FieldErrors::single(
                "user_id",
                "has already been taken",
            )))
        }
        Err(err) => Err(err.into()),
    }
}

async fn require_module(db: &DatabaseConnection, module_id: i64) -> Result<module::Model, ServiceError> {
    module::Model::get_by_id(db, module_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Module not found"))
}

async fn require_active_column(
    db: &DatabaseConnection,
    module_id: i64,
    column_id: i64,
) -> Result<custom_gradebook_column::Model, ServiceError> {
    custom_gradebook_column::Model::find_active_in_module(db, module_id, column_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Column not found"))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
