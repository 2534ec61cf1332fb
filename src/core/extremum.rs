use crate::domain::model::{AreaPerResident, HouseRecord};
use crate::utils::error::{EtlError, Result};

/// Finds the house with the least residential area per resident.
///
/// Records are scanned in order with a strict `<`, so the first of several
/// equal ratios wins. Zero population aborts the scan with
/// [`EtlError::DivisionByZero`]; an empty slice is [`EtlError::EmptyInput`].
pub fn min_area_per_resident(houses: &[HouseRecord]) -> Result<AreaPerResident<'_>> {
    if houses.is_empty() {
        return Err(EtlError::EmptyInput);
    }

    let mut min_ratio = f64::INFINITY;
    let mut address: Option<&str> = None;

    for house in houses {
        if house.population == 0 {
            return Err(EtlError::DivisionByZero {
                address: house.house_address.clone(),
            });
        }

        let ratio = house.area_residential / house.population as f64;
        if ratio < min_ratio {
            min_ratio = ratio;
            address = Some(house.house_address.as_str());
        }
    }

    // NaN or infinite ratios never win
    let house_address = address.ok_or_else(|| EtlError::ValidationError {
        message: "no house has a finite residential area per resident".to_string(),
    })?;

    Ok(AreaPerResident {
        house_address,
        area_per_resident: min_ratio,
    })
}
