//! Custom gradebook columns.
//!
//! A column is a per-module, free-text gradebook column (e.g. "Notes",
//! "Accommodations"). Columns are soft-deleted through `workflow_state`;
//! only `active` columns are visible to the data endpoints.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_gradebook_columns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub position: i32,
    pub hidden: bool,
    pub workflow_state: WorkflowState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "custom_gradebook_column_state"
)]
pub enum WorkflowState {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,

    #[sea_orm(has_many = "super::custom_gradebook_column_datum::Entity")]
    Data,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::custom_gradebook_column_datum::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Data.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        module_id: i64,
        title: &str,
        position: i32,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            module_id: Set(module_id),
            title: Set(title.to_owned()),
            position: Set(position),
            hidden: Set(false),
            workflow_state: Set(WorkflowState::Active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Finds an active column by id, scoped to `module_id`.
    ///
    /// Deleted columns and columns belonging to other modules are treated
    /// as missing.
    pub async fn find_active_in_module(
        db: &DatabaseConnection,
        module_id: i64,
        id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::ModuleId.eq(module_id))
            .filter(Column::WorkflowState.eq(WorkflowState::Active))
            .one(db)
            .await
    }

    /// Soft-deletes the column. Its data rows are left in place.
    pub async fn soft_delete(db: &DatabaseConnection, id: i64) -> Result<Self, DbErr> {
        let Some(column) = Entity::find_by_id(id).one(db).await? else {
            return Err(DbErr::RecordNotFound(format!("Column {id} not found")));
        };

        let mut active = column.into_active_model();
        active.workflow_state = Set(WorkflowState::Deleted);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub fn is_active(&self) -> bool {
        self.workflow_state == WorkflowState::Active
    }
}
