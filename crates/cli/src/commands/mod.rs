//! CLI command implementations.

pub mod ideas;
pub mod migrate;
pub mod pages;
pub mod pricing;
pub mod signups;

use launchkit_web::config::AppConfig;
use launchkit_web::db;
use sqlx::SqlitePool;

/// Open the database named by `DATABASE_URL` for a read-only report.
///
/// The database must already exist; schema changes belong to `migrate`.
async fn open_database() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    db::open_existing_pool(&config.database_url)
        .await
        .map_err(|e| format!("Failed to open database (run `lk-cli migrate` first?): {e}").into())
}
