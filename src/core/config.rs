//! Configuration management

use crate::core::{Equipment, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pcm-dashboard";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join(APP_DIR);

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "pt"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Where work orders are loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Json,
    Sqlite,
}

/// Record store source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub source: DataSource,
    /// Data file; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DataConfig {
    /// Resolve the data file path for the configured source
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;
        let file = match self.source {
            DataSource::Json => "work_orders.json",
            DataSource::Sqlite => "work_orders.db",
        };
        Ok(data_dir.join(APP_DIR).join(file))
    }
}

/// Display settings for the presentation adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number formatting locale: "pt-BR" or "en-US"
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_locale() -> String { "pt-BR".to_string() }
fn default_currency_symbol() -> String { "R$".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Aggregation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Narrow KPI counts and reliability metrics by the equipment selection
    #[serde(default)]
    pub narrow_kpis_by_equipment: bool,
}

/// Equipment catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Explicit equipment list; empty means derive from the loaded records
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.data.source, DataSource::Json);
        assert_eq!(config.display.locale, "pt-BR");
        assert!(!config.analytics.narrow_kpis_by_equipment);
        assert!(config.catalog.equipment.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [general]
            language = "en"

            [data]
            source = "sqlite"
            path = "/tmp/orders.db"

            [display]
            locale = "en-US"
            currency_symbol = "$"

            [analytics]
            narrow_kpis_by_equipment = true

            [[catalog.equipment]]
            id = "FRESA"
            name = "Fresa"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.source, DataSource::Sqlite);
        assert_eq!(config.data.resolve_path().unwrap(), PathBuf::from("/tmp/orders.db"));
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.analytics.narrow_kpis_by_equipment);
        assert_eq!(config.catalog.equipment, vec![Equipment::new("FRESA", "Fresa")]);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let result = Config::parse("[data]\nsource = \"csv\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "pt".to_string();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.general.language, "pt");
    }
}
