use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tool configuration. Every field has a default, so a config file only
/// needs to state what it changes; CLI flags override the loaded values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for workflow definition files.
    #[serde(default = "default_workflows_dir")]
    pub workflows_dir: String,

    /// Path of the generated markdown report.
    #[serde(default = "default_output")]
    pub output: String,

    /// Raise log verbosity from warn to info.
    #[serde(default)]
    pub verbose: bool,
}

fn default_workflows_dir() -> String {
    ".github/workflows".to_string()
}

fn default_output() -> String {
    "WORKFLOWS.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workflows_dir: default_workflows_dir(),
            output: default_output(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        // Try repo root first (per-repo config)
        if let Ok(config) = Self::load_from_path("workflowdoc.toml") {
            debug!("Loaded config from ./workflowdoc.toml");
            return Ok(config);
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("workflowdoc").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        // Return defaults
        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
