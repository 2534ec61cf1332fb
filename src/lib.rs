pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::HousingPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CategoryThresholds, OutputFormat, StaticConfig};
pub use crate::core::etl::EtlEngine;
pub use domain::model::{Category, HouseRecord, HousingSummary};
pub use utils::error::{EtlError, Result};
