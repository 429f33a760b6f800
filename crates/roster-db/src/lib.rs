//! # Roster DB
//!
//! Database pool and migrations for the Roster service.
//!
//! The service stores its records in SQLite through SQLx. Migrations live in
//! the workspace `migrations/` directory and are embedded into the binary at
//! compile time.
//!
//! # Example
//!
//! ```ignore
//! use roster_config::DatabaseConfig;
//! use roster_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use roster_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a SQLite connection pool.
///
/// The database file is created when it does not exist yet and foreign
/// keys are enforced on every connection.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the first connection
/// cannot be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(url = %config.url, max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
