use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::{config::AppConfig, migration::Migrator};

/// Create a SeaORM connection from application config.
pub async fn create_orm_conn(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(config.sql_logging);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply every pending schema migration (tables, constraints, views).
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}

/// Drop and recreate the whole schema. Used to get a clean database in tests.
pub async fn reset_schema(conn: &DatabaseConnection) -> Result<()> {
    Migrator::refresh(conn).await?;
    Ok(())
}
