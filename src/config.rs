// Presentation preferences loaded from YAML

use chrono::format::{Item, StrftimeItems};
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "todolist";
const CONFIG_FILE: &str = "todolist.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour category headings and rows
    pub color: bool,
    /// Ring the terminal bell after a task is added
    pub bell: bool,
    /// chrono format string for the time a task was added
    pub time_format: String,
    /// Show "Done" next to finished tasks instead of only striking them
    pub show_done_label: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            bell: true,
            time_format: "%H:%M:%S".to_string(),
            show_done_label: true,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the per-user file under the
    /// platform config directory is read if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(eyre!("Config file not found: {}", path.display()));
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;

        info!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// Reject settings that would fail at render time
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(eyre!("Invalid time_format: {}", self.time_format));
        }
        Ok(())
    }

    /// `<config_dir>/todolist/todolist.yml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}
