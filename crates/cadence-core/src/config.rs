use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_CATALOG_PATH;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportLabels,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// ## Summary
/// Labels used when rendering the weekly report.
///
/// Injected into the renderer as a value so presentation wording can be
/// overridden from configuration without touching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub title: String,
    pub morning: String,
    pub evening: String,
    pub variable: String,
    pub column_name: String,
    pub column_dose: String,
    pub column_time: String,
    pub weekdays: [String; 7],
    pub present: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            title: "Supplement plan for week".to_string(),
            morning: "Morning".to_string(),
            evening: "Evening".to_string(),
            variable: "Variable intake".to_string(),
            column_name: "Supplement".to_string(),
            column_dose: "Dose".to_string(),
            column_time: "Time".to_string(),
            weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
            present: "✅".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8699)?
            .set_default("catalog.path", DEFAULT_CATALOG_PATH)?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
