use crate::config::{CategoryThresholds, OutputFormat};
use crate::domain::model::{HouseRecord, HousingSummary};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn thresholds(&self) -> CategoryThresholds;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<HouseRecord>>;
    fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingSummary>;
    fn load(&self, summary: &HousingSummary) -> Result<String>;
}
