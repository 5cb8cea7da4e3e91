use std::env;

use anyhow::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::sqlite;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub sqlite: sqlite::Settings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Defaults, then `config/default.toml`, then `APP_*` variables.
    /// `DATABASE_URL` and `API_PORT` win over everything else.
    pub fn load() -> Result<Self> {
        let settings = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("sqlite.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", env::var("API_PORT").ok())?
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("sqlite.url", "sqlite://db/clubs.db")?
        .set_default("sqlite.max_connections", 5)?;

    Ok(builder)
}
