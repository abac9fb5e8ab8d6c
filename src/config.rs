use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Group shopping-list exports by category.
    #[serde(default = "default_grouped")]
    pub grouped: bool,
    /// Append suggested staples to generated lists.
    #[serde(default)]
    pub include_staples: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            grouped: default_grouped(),
            include_staples: false,
        }
    }
}

fn default_grouped() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CAMPKIT__LOGGING__LEVEL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "console")?
            .set_default("export.grouped", true)?
            .set_default("export.include_staples", false)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (CAMPKIT__EXPORT__GROUPED, etc.)
        builder = builder.add_source(
            Environment::with_prefix("CAMPKIT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => return Err(format!("Unsupported logging format: {other}")),
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(format!("Unsupported logging level: {other}")),
        }
        Ok(())
    }
}
