pub mod error;
pub mod events;
pub mod learning;
pub mod models;
pub mod quest_engine;
pub mod test_utils;
pub mod unlock;


use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use tracing::warn;
use util::config;

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path. For a file
/// path the parent directory is created and the file is opened in
/// read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path())?;
    Database::connect(&url).await
}

fn database_url(path_or_url: &str) -> Result<String, DbErr> {
    if path_or_url.starts_with("sqlite:") {
        return Ok(path_or_url.to_owned());
    }

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            warn!(path = %parent.display(), error = %e, "Failed to create database directory");
            DbErr::Custom(format!(
                "cannot create database directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}
