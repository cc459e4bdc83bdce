use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

use super::store::{Store, StorePolicy};

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Store> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to the database")?;
    sync_schema(&db).await?;
    Ok(Store::new(db, StorePolicy::from(cfg)))
}

pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("restaurant_server::db::entities::*")
        .sync(db)
        .await
        .context("failed to sync database schema")?;
    Ok(())
}
