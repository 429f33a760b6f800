use roster_config::{CorsConfig, DatabaseConfig};
use roster_db::{init_db_pool, run_migrations};
use sqlx::SqlitePool;

use crate::utils::tracing::ErrorExt;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub cors_config: CorsConfig,
}

/// Opens the pool and brings the schema up to date.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env())
        .await
        .log_error("opening database pool")?;
    run_migrations(&db)
        .await
        .log_error("running migrations")?;

    Ok(AppState {
        db,
        cors_config: CorsConfig::from_env(),
    })
}
