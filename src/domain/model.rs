use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column names expected in the input header row, in file order.
pub const HOUSE_RECORD_COLUMNS: [&str; 7] = [
    "area_id",
    "house_address",
    "floor_count",
    "heating_house_type",
    "heating_value",
    "area_residential",
    "population",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    pub area_id: String,
    pub house_address: String,
    pub floor_count: i64,
    pub heating_house_type: String,
    pub heating_value: f64,
    pub area_residential: f64,
    pub population: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Low-rise")]
    LowRise,
    #[serde(rename = "Mid-rise")]
    MidRise,
    #[serde(rename = "High-rise")]
    HighRise,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::LowRise => "Low-rise",
            Category::MidRise => "Mid-rise",
            Category::HighRise => "High-rise",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The record with the smallest residential area per resident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPerResident<'a> {
    pub house_address: &'a str,
    pub area_per_resident: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinAreaResult {
    pub house_address: String,
    pub area_per_resident: f64,
}

impl From<AreaPerResident<'_>> for MinAreaResult {
    fn from(value: AreaPerResident<'_>) -> Self {
        Self {
            house_address: value.house_address.to_string(),
            area_per_resident: value.area_per_resident,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingSummary {
    pub total_records: usize,
    pub category_counts: BTreeMap<Category, usize>,
    pub min_area_per_resident: MinAreaResult,
}
