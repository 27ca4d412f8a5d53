use hostscope_domain::config::DatabaseConfig;
use hostscope_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = cfg.url();
    info!("Initializing database: {}", database_url);

    let pool = create_pool(
        &database_url,
        cfg.max_connections,
        Duration::from_secs(cfg.busy_timeout_secs),
    )
    .await
    .map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        "Database initialized successfully"
    );

    Ok(pool)
}
