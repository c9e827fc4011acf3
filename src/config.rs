//! Configuration handling for the TUI

use crate::state::{CountryCities, CountryCityTable};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Initial state of the show-password checkbox
    pub show_password: Option<bool>,
    /// Replacement country/city table, in display order
    pub countries: Option<Vec<CountryCities>>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "register", "register-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is missing
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the country/city table, falling back to the built-in one
    pub fn country_table(&self) -> CountryCityTable {
        let table = CountryCityTable::new(self.countries.clone().unwrap_or_default());
        if table.is_empty() {
            CountryCityTable::default()
        } else {
            table
        }
    }

    pub fn show_password(&self) -> bool {
        self.show_password.unwrap_or(false)
    }
}
