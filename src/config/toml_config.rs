use crate::config::{CategoryThresholds, OutputFormat, DEFAULT_INPUT_FILE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub classification: Option<CategoryThresholds>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Fills settings the file leaves out from command line values.
    pub fn with_fallbacks(mut self, input_file: &str, format: OutputFormat) -> Self {
        let source = self.source.get_or_insert_with(SourceConfig::default);
        if source.input_file.is_none() {
            source.input_file = Some(input_file.to_string());
        }

        let output = self.output.get_or_insert_with(OutputConfig::default);
        if output.format.is_none() {
            output.format = Some(format);
        }
        self
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.input_file.as_deref())
            .unwrap_or(DEFAULT_INPUT_FILE)
    }

    fn thresholds(&self) -> CategoryThresholds {
        self.classification.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.input_file", self.input_file())?;
        self.thresholds().validate()
    }
}
