//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rate line display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Rate line display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Text shown while denomination data is still loading.
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    /// Separator between integer digit groups.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
    /// Separator between integer and fractional digits.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Digits per integer group. Zero disables grouping.
    #[serde(default = "default_grouping_size")]
    pub grouping_size: usize,
}

fn default_loading_message() -> String {
    "Exchange rate loading".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_grouping_size() -> usize {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            loading_message: default_loading_message(),
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
            grouping_size: default_grouping_size(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXLINE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
