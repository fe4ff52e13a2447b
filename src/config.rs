use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub sql_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(5);
        let sql_logging = env::var("DB_SQL_LOGGING")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            max_connections,
            sql_logging,
        })
    }

    /// Config for a throwaway database. In-memory SQLite lives inside one
    /// connection, so the pool is pinned to a single connection there.
    pub fn for_url(database_url: impl Into<String>) -> Self {
        let database_url = database_url.into();
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        Self {
            database_url,
            max_connections,
            sql_logging: false,
        }
    }
}
