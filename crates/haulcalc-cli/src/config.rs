//! Configuration management for haulcalc
//!
//! Config stored at: ~/.config/haulcalc/config.json

use haulcalc_domain::service::CostRates;
use haulcalc_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cost constants used by the single-load estimator
    #[serde(default)]
    pub rates: CostRates,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: CostRates::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulcalc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the load book file path
    pub fn book_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulcalc");
        Ok(data_dir.join("load_book.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulcalc Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Fuel cost per mile:     ${:.2}", self.rates.fuel_cost_per_mile)?;
        writeln!(
            f,
            "Dispatcher fee rate:    {:.1}%",
            self.rates.dispatcher_fee_rate * 100.0
        )?;
        writeln!(
            f,
            "Maintenance per mile:   ${:.2}",
            self.rates.maintenance_cost_per_mile
        )?;
        writeln!(f, "Flat toll cost:         ${:.2}", self.rates.default_toll_cost)?;
        writeln!(f, "Output format:          {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:            {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!((config.rates.fuel_cost_per_mile - 0.6).abs() < f64::EPSILON);
        assert!((config.rates.default_toll_cost - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_rates_fill_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"rates": {"fuel_cost_per_mile": 0.8}}"#).unwrap();
        assert!((config.rates.fuel_cost_per_mile - 0.8).abs() < f64::EPSILON);
        assert!((config.rates.dispatcher_fee_rate - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.rates.default_toll_cost = 75.0;
        config.output_format = OutputFormat::Json;

        let json = serde_json::to_string(&config).unwrap();
        let reloaded: Config = serde_json::from_str(&json).unwrap();
        assert!((reloaded.rates.default_toll_cost - 75.0).abs() < f64::EPSILON);
        assert_eq!(reloaded.output_format, OutputFormat::Json);
    }
}
