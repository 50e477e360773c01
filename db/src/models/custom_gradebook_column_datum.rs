use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One user's value for one custom gradebook column.
///
/// At most one row exists per `(custom_gradebook_column_id, user_id)`; the
/// migration backs this with a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_gradebook_column_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub custom_gradebook_column_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::custom_gradebook_column::Entity",
        from = "Column::CustomGradebookColumnId",
        to = "super::custom_gradebook_column::Column::Id",
        on_delete = "Cascade"
    )]
    CustomGradebookColumn,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::custom_gradebook_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomGradebookColumn.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
