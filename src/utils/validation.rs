use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Checks `lower <= upper`, reporting the failure against `field_name`.
pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    lower: T,
    upper: T,
) -> Result<()> {
    if lower > upper {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: upper.to_string(),
            reason: format!("Value must not be below {}", lower),
        });
    }
    Ok(())
}

pub fn validate_required_columns(headers: &[&str], required: &[&str]) -> Result<()> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|column| !headers.contains(column))
        .collect();

    if !missing.is_empty() {
        return Err(EtlError::ParseError {
            line: 1,
            message: format!("missing required columns: {}", missing.join(", ")),
        });
    }
    Ok(())
}
