use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202505290001_create_users::Migration),
            Box::new(migrations::m202505290002_create_modules::Migration),
            Box::new(migrations::m202505290003_create_user_module_roles::Migration),
            Box::new(migrations::m202510180001_create_custom_gradebook_columns::Migration),
            Box::new(migrations::m202510180002_create_custom_gradebook_column_data::Migration),
        ]
    }
}
