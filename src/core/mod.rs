pub mod aggregator;
pub mod classifier;
pub mod etl;
pub mod extremum;
pub mod loader;
pub mod report;

pub use crate::domain::model::{Category, HouseRecord, HousingSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
