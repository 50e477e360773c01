pub mod custom_gradebook_column;
pub mod custom_gradebook_column_datum;
pub mod module;
pub mod user;
pub mod user_module_role;

pub use custom_gradebook_column::Entity as CustomGradebookColumn;
pub use custom_gradebook_column_datum::Entity as CustomGradebookColumnDatum;
pub use module::Entity as Module;
pub use user::Entity as User;
pub use user_module_role::Entity as UserModuleRole;
