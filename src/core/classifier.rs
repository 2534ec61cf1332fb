use crate::config::CategoryThresholds;
use crate::domain::model::{Category, HouseRecord};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

/// Maps a floor count to its height category.
///
/// Non-positive counts are rejected with [`EtlError::InvalidFloorCount`].
/// Positive counts outside both the low-rise and mid-rise ranges are high-rise.
pub fn classify_house(floor_count: i64, thresholds: &CategoryThresholds) -> Result<Category> {
    if floor_count <= 0 {
        return Err(EtlError::InvalidFloorCount { floor_count });
    }

    let category = if thresholds.is_low_rise(floor_count) {
        Category::LowRise
    } else if thresholds.is_mid_rise(floor_count) {
        Category::MidRise
    } else {
        Category::HighRise
    };

    Ok(category)
}

/// Classifies a dynamically typed floor count.
///
/// Anything that is not a JSON integer (floats, strings, booleans, null)
/// fails with [`EtlError::InvalidFloorType`].
pub fn classify_floor_value(value: &Value, thresholds: &CategoryThresholds) -> Result<Category> {
    if let Some(floor_count) = value.as_i64() {
        return classify_house(floor_count, thresholds);
    }

    // integers beyond i64::MAX
    if value.is_u64() {
        return Ok(Category::HighRise);
    }

    Err(EtlError::InvalidFloorType {
        value: value.to_string(),
    })
}

pub fn classify_houses(
    houses: &[HouseRecord],
    thresholds: &CategoryThresholds,
) -> Result<Vec<Category>> {
    houses
        .iter()
        .map(|house| {
            classify_house(house.floor_count, thresholds).inspect_err(|e| {
                tracing::debug!("Cannot classify '{}': {}", house.house_address, e);
            })
        })
        .collect()
}
