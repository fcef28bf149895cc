use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::db::connect_options;
use crate::error::AppError;

/// Open the application pool. Runs no migrations; schema is managed elsewhere.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(connect_options(database_url)).await?;
    info!("Database connected");
    Ok(conn)
}
