use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use domain::recommendation::DEFAULT_REFERENCE_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}
fn default_acquire_timeout() -> u64 {
    5
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdvisoryConfig {
    /// Directory holding the recommendation_*.txt files
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Regulatory reference reported as `EU_law`
    #[serde(default = "default_reference_url")]
    pub reference_url: String,
}

fn default_templates_dir() -> String {
    "./templates".to_string()
}
fn default_reference_url() -> String {
    DEFAULT_REFERENCE_URL.to_string()
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            reference_url: default_reference_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let database_url = std::env::var("DATABASE_URL").ok();

        layered_files(config_dir, &run_mode, database_url)?
            // 1. Environment variables (e.g. FOOTPRINT__SERVER__PORT=9090)
            .add_source(
                Environment::with_prefix("FOOTPRINT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Defaults and config files, without the process environment layer.
fn layered_files(
    config_dir: &str,
    run_mode: &str,
    database_url: Option<String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", default_host())?
        .set_default("server.port", 8080)?;

    // DATABASE_URL (from the process or .env) is the lowest-priority source for the url
    if let Some(url) = database_url {
        builder = builder.set_default("database.url", url)?;
    }

    Ok(builder
        // 3. Local config file, e.g. config/default.toml
        .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
        // 2. Run-mode overrides, e.g. config/production.toml
        .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false)))
}
