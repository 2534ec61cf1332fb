use crate::utils::error::Result;
use crate::utils::validation::{validate_ordered, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_LOW_RISE_FLOORS: i64 = 1;
pub const MAX_LOW_RISE_FLOORS: i64 = 5;
pub const MIN_MID_RISE_FLOORS: i64 = 6;
pub const MAX_MID_RISE_FLOORS: i64 = 16;

/// Inclusive floor-count bounds for the low-rise and mid-rise categories.
/// Every other positive floor count is high-rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryThresholds {
    pub min_low_rise_floors: i64,
    pub max_low_rise_floors: i64,
    pub min_mid_rise_floors: i64,
    pub max_mid_rise_floors: i64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            min_low_rise_floors: MIN_LOW_RISE_FLOORS,
            max_low_rise_floors: MAX_LOW_RISE_FLOORS,
            min_mid_rise_floors: MIN_MID_RISE_FLOORS,
            max_mid_rise_floors: MAX_MID_RISE_FLOORS,
        }
    }
}

impl CategoryThresholds {
    pub fn is_low_rise(&self, floor_count: i64) -> bool {
        (self.min_low_rise_floors..=self.max_low_rise_floors).contains(&floor_count)
    }

    pub fn is_mid_rise(&self, floor_count: i64) -> bool {
        (self.min_mid_rise_floors..=self.max_mid_rise_floors).contains(&floor_count)
    }
}

impl Validate for CategoryThresholds {
    fn validate(&self) -> Result<()> {
        validate_positive_number("classification.min_low_rise_floors", self.min_low_rise_floors, 1)?;
        validate_ordered(
            "classification.max_low_rise_floors",
            self.min_low_rise_floors,
            self.max_low_rise_floors,
        )?;
        // ranges must not overlap
        validate_ordered(
            "classification.min_mid_rise_floors",
            self.max_low_rise_floors.saturating_add(1),
            self.min_mid_rise_floors,
        )?;
        validate_ordered(
            "classification.max_mid_rise_floors",
            self.min_mid_rise_floors,
            self.max_mid_rise_floors,
        )?;
        Ok(())
    }
}
