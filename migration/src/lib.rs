pub mod migrations;
mod migrator;

pub use migrator::Migrator;

/// Connection URL for the SQLite file at `path`, created on first open.
///
/// `DATABASE_PATH` is always a file path; the server and the migration CLI
/// both build their URL here.
pub fn sqlite_url(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}
