//! Feature derivation for Airbnb NYC listings
//!
//! Reads a cleaned listings CSV, derives per-row feature columns, and writes
//! the augmented table back out.

pub mod data;
pub mod features;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The room type label that marks a whole-property listing
pub const ENTIRE_HOME_LABEL: &str = "Entire home/apt";

/// Typed view of the fields the derivations read from one listing row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub number_of_reviews: u32,
    pub price: f64,
    pub minimum_nights: i32,
    pub availability_365: u16,
    pub room_type: String,
}

/// Availability bucket over days available per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityBand {
    NotAvailable,
    Low,
    Medium,
    High,
}

impl AvailabilityBand {
    /// Bucket a day count: 0, (0,120], (120,240], (240,365]
    pub fn from_days(days: u16) -> Self {
        match days {
            0 => AvailabilityBand::NotAvailable,
            1..=120 => AvailabilityBand::Low,
            121..=240 => AvailabilityBand::Medium,
            _ => AvailabilityBand::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityBand::NotAvailable => "Not Available",
            AvailabilityBand::Low => "Low",
            AvailabilityBand::Medium => "Medium",
            AvailabilityBand::High => "High",
        }
    }
}

impl fmt::Display for AvailabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ListingsError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub input_path: String,
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                input_path: "AB_NYC_Cleaned1.csv".to_string(),
                output_path: "AB_NYC_Featured.csv".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ListingsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| ListingsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ListingsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(AvailabilityBand::from_days(0), AvailabilityBand::NotAvailable);
        assert_eq!(AvailabilityBand::from_days(1), AvailabilityBand::Low);
        assert_eq!(AvailabilityBand::from_days(120), AvailabilityBand::Low);
        assert_eq!(AvailabilityBand::from_days(121), AvailabilityBand::Medium);
        assert_eq!(AvailabilityBand::from_days(240), AvailabilityBand::Medium);
        assert_eq!(AvailabilityBand::from_days(241), AvailabilityBand::High);
        assert_eq!(AvailabilityBand::from_days(365), AvailabilityBand::High);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(AvailabilityBand::NotAvailable.label(), "Not Available");
        assert_eq!(AvailabilityBand::Low.to_string(), "Low");
        assert_eq!(AvailabilityBand::Medium.to_string(), "Medium");
        assert_eq!(AvailabilityBand::High.to_string(), "High");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.data.input_path, "AB_NYC_Cleaned1.csv");
        assert_eq!(parsed.data.output_path, "AB_NYC_Featured.csv");
    }
}
