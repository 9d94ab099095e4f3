// ABOUTME: Configuration management for the stencil CLI
// ABOUTME: Loads YAML configuration from standard locations and applies environment overrides

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::scanner::{DEFAULT_CLOSE, DEFAULT_OPEN};
use crate::template::Delimiters;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub delimiters: DelimiterConfig,

    /// JSON file used as the default data layer
    #[serde(default)]
    pub default_data: Option<PathBuf>,

    /// JSON file used as the master data layer
    #[serde(default)]
    pub master_data: Option<PathBuf>,

    /// `key.path = value` overrides folded into the master layer
    #[serde(default)]
    pub variables: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelimiterConfig {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl DelimiterConfig {
    pub fn to_delimiters(&self) -> Delimiters {
        Delimiters::new(self.open.clone(), self.close.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            "stencil.yaml",
            "stencil.yml",
            ".stencil.yaml",
            ".stencil.yml",
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".stencil").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        possible_paths
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from("stencil.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("STENCIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STENCIL_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(open) = std::env::var("STENCIL_OPEN_DELIMITER") {
            self.delimiters.open = open;
        }
        if let Ok(close) = std::env::var("STENCIL_CLOSE_DELIMITER") {
            self.delimiters.close = close;
        }
    }

    /// Merge additional variables, replacing existing keys
    pub fn merge_variables(&mut self, vars: HashMap<String, String>) {
        self.variables.extend(vars);
    }
}
