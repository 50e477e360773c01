pub mod m202505290001_create_users;
pub mod m202505290002_create_modules;
pub mod m202505290003_create_user_module_roles;
pub mod m202510180001_create_custom_gradebook_columns;
pub mod m202510180002_create_custom_gradebook_column_data;
