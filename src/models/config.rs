use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the console entry point.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Default `env_logger` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Loads `config/default.yaml`, then `config/{APP_ENV}.yaml`, then
    /// `PRICEMASTER_*` environment variables. Later sources win.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("PRICEMASTER"))
            .build()?
            .try_deserialize()
    }
}
