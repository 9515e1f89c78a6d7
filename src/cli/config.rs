// ABOUTME: Configuration management for sliceview
// ABOUTME: Handles loading configuration from YAML files and merging environment overrides

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::template::RenderOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
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

        let mut config: Config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        Self::find_config_file_in(Path::new(""), dirs::home_dir())
    }

    /// Current directory files win over the home directory config
    fn find_config_file_in(dir: &Path, home_dir: Option<PathBuf>) -> PathBuf {
        let possible_paths = [
            "sliceview.yaml",
            "sliceview.yml",
            ".sliceview.yaml",
            ".sliceview.yml",
        ];

        for name in possible_paths {
            let path = dir.join(name);
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = home_dir {
            let home_config = home_dir.join(".sliceview").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Return default path (may not exist)
        dir.join("sliceview.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SLICEVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SLICEVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Some(strict) = lookup("SLICEVIEW_STRICT") {
            self.render.strict_mode = strict.parse::<bool>().map_err(|e| {
                anyhow::anyhow!("Invalid SLICEVIEW_STRICT value '{}': {}", strict, e)
            })?;
        }
        if let Some(position) = lookup("SLICEVIEW_TIP_POSITION") {
            self.render.default_tip_position = position.parse()?;
        }

        Ok(())
    }

    /// Merge additional variables into template variables
    pub fn merge_variables(&mut self, vars: HashMap<String, String>) {
        self.template_vars.extend(vars);
    }
}
