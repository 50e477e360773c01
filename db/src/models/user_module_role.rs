use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The central table for user-module-role relationships.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_module_roles")]
pub struct Model {
    /// User ID (foreign key to `users`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    /// Module ID (foreign key to `modules`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub module_id: i64,

    pub role: Role,
}

/// Enum representing user roles within a module.
/// Backed by a `user_module_role_type` enum in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_module_role_type")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "lecturer")]
    Lecturer,

    #[sea_orm(string_value = "assistant_lecturer")]
    AssistantLecturer,

    #[sea_orm(string_value = "tutor")]
    Tutor,

    #[sea_orm(string_value = "student")]
    Student,
}

impl Role {
    /// Staff roles can see every student's grades in the module.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Lecturer | Role::AssistantLecturer | Role::Tutor)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assigns a user to a module, replacing any role they already hold there.
    pub async fn assign_user_to_module(
        db: &DatabaseConnection,
        user_id: i64,
        module_id: i64,
        role: Role,
    ) -> Result<Self, DbErr> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ModuleId.eq(module_id))
            .exec(db)
            .await?;

        ActiveModel {
            user_id: Set(user_id),
            module_id: Set(module_id),
            role: Set(role),
        }
        .insert(db)
        .await
    }

    /// Returns the role a user holds in a module, if any.
    pub async fn get_role(
        db: &DatabaseConnection,
        user_id: i64,
        module_id: i64,
    ) -> Result<Option<Role>, DbErr> {
        Ok(Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ModuleId.eq(module_id))
            .one(db)
            .await?
            .map(|m| m.role))
    }

    /// IDs of every user holding `role` in the module, ascending.
    pub async fn user_ids_with_role(
        db: &DatabaseConnection,
        module_id: i64,
        role: Role,
    ) -> Result<Vec<i64>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::UserId)
            .filter(Column::ModuleId.eq(module_id))
            .filter(Column::Role.eq(role))
            .order_by_asc(Column::UserId)
            .into_tuple::<i64>()
            .all(db)
            .await
    }
}
