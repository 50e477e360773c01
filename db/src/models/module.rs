use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// A course offering. Every gradebook column is scoped to exactly one module.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Module code, e.g. "COS301".
    pub code: String,
    pub year: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::custom_gradebook_column::Entity")]
    CustomGradebookColumns,

    #[sea_orm(has_many = "super::user_module_role::Entity")]
    UserRoles,
}

impl Related<super::custom_gradebook_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomGradebookColumns.def()
    }
}

impl Related<super::user_module_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        code: &str,
        year: i32,
        description: Option<&str>,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let module = ActiveModel {
            code: Set(code.to_owned()),
            year: Set(year),
            description: Set(description.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        module.insert(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }
}
