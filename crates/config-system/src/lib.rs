//! Configuration for the energy dashboard build
//! Manages input and output paths, generation-cloud scaling and the
//! sampling seed. Every field has a default, so a config file only needs
//! to name what it overrides.

use energy_dashboard_shared::CloudScale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser};
pub use validation::ConfigValidator;

/// File looked up in the working directory when no other path is given
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub clouds: CloudScale,
    pub sampling: SamplingConfig,
}

/// Location of the two CSV inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub sales_path: PathBuf,
    pub generation_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sales_path: PathBuf::from("data/dataframe1.csv"),
            generation_path: PathBuf::from("data/dataframe2.csv"),
        }
    }
}

/// Where and how the document is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub html_path: PathBuf,
    pub title: String,
    /// Script URL the document loads the plotting library from
    pub plotly_js_url: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from("outputs/golden_image.html"),
            title: "U.S. Renewable Energy Dashboard".to_string(),
            plotly_js_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}

/// Seeding of the synthetic coordinate sampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl DashboardConfig {
    /// Parse and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigParser::parse_file(path)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
