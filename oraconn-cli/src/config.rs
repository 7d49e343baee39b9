//! CLI configuration handling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "oraconn.toml";

/// Default inventory file name
pub const INVENTORY_FILE_NAME: &str = "inventory.toml";

/// oraconn CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inventory configuration
    pub inventory: InventoryConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Directory of the file this config was loaded from
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Load `explicit` if given, else `./oraconn.toml` if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(CONFIG_FILE_NAME);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Inventory path; relative paths are resolved against the config file
    pub fn inventory_path(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) if self.inventory.path.is_relative() => dir.join(&self.inventory.path),
            _ => self.inventory.path.clone(),
        }
    }
}

/// Inventory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Path to the inventory file (TOML or JSON)
    pub path: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(INVENTORY_FILE_NAME),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Treat any recorded diagnostic as a failure
    pub strict: bool,
}
