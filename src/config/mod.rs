pub mod cli;
pub mod thresholds;
pub mod toml_config;

pub use thresholds::CategoryThresholds;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "housing_data.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "housing-stats")]
#[command(about = "Summarise housing records by building height and living space per resident")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_INPUT_FILE, help = "CSV file with housing records")]
    pub input: String,

    #[arg(long, default_value = ".", help = "Directory the input file is read from")]
    pub data_dir: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn thresholds(&self) -> CategoryThresholds {
        CategoryThresholds::default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("data_dir", &self.data_dir)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}

/// Default-valued provider, handy for library callers that skip the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticConfig {
    pub input_file: String,
    pub thresholds: CategoryThresholds,
    pub output_format: OutputFormat,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            input_file: DEFAULT_INPUT_FILE.to_string(),
            thresholds: CategoryThresholds::default(),
            output_format: OutputFormat::Text,
        }
    }
}

impl ConfigProvider for StaticConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn thresholds(&self) -> CategoryThresholds {
        self.thresholds
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for StaticConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        self.thresholds.validate()
    }
}
