pub mod models;
pub mod repositories;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the application database.
///
/// `DATABASE_PATH` is a SQLite file path. Its parent directory is created
/// and the file is opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path = config::database_path();

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let url = migration::sqlite_url(&path);

    tracing::info!(%url, "Connecting to database");
    Database::connect(&url).await
}
