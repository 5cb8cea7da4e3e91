use std::str::FromStr;

use anyhow::Result;
use serde::Deserialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub url: String,
    pub max_connections: u32,
}

impl Settings {
    /// A private in-memory database. Every connection to `sqlite::memory:`
    /// opens a fresh database, so the pool is pinned to one connection that
    /// is never reaped.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

pub async fn create_pool(settings: &Settings) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(settings.max_connections);
    if settings.is_memory() {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else if let Some(parent) = connect_options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = pool_options.connect_with(connect_options).await?;
    tracing::info!("Connected to {}", settings.url);

    sqlx::migrate!("db/migrations").run(&pool).await?;
    tracing::debug!("Migrations complete");

    Ok(pool)
}
