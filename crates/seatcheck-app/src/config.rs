//! Configuration management for seatcheck
//!
//! Config stored at: ~/.config/seatcheck/config.json

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use seatcheck_types::{ConfigError, OutputFormat, Result, Unit};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data directory override (defaults to the platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Address the REST server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Unit dimensions are entered in when none is given
    #[serde(default)]
    pub default_unit: Unit,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Insert the built-in airline dataset into an empty store
    #[serde(default = "default_true")]
    pub seed_airlines: bool,

    /// Built front-end assets to serve next to the API
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Cache lifetime for fingerprinted static assets
    #[serde(default = "default_asset_max_age_secs")]
    pub asset_max_age_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_asset_max_age_secs() -> u64 {
    365 * 24 * 60 * 60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            bind_addr: default_bind_addr(),
            default_unit: Unit::default(),
            output_format: OutputFormat::default(),
            seed_airlines: true,
            static_dir: None,
            asset_max_age_secs: default_asset_max_age_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("seatcheck");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("seatcheck");
        Ok(data_dir)
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr.parse().map_err(|e| {
            ConfigError::InvalidValue(format!("bind_addr '{}': {}", self.bind_addr, e)).into()
        })
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seatcheck Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Bind address:   {}", self.bind_addr)?;
        writeln!(f, "Default unit:   {}", self.default_unit)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Seed airlines:  {}", self.seed_airlines)?;
        writeln!(
            f,
            "Static dir:     {}",
            self.static_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Asset max-age:  {}s", self.asset_max_age_secs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_unit, Unit::Inches);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.seed_airlines);
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_unit": "cm"}"#).unwrap();
        assert_eq!(config.default_unit, Unit::Centimeters);
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.asset_max_age_secs, 31_536_000);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            data_dir: Some(dir.path().join("data")),
            bind_addr: "0.0.0.0:8080".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        assert_eq!(config.data_dir().unwrap(), dir.path().join("data"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let config = Config {
            bind_addr: "not an address".to_string(),
            ..Config::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
