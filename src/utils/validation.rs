use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive bounds check used for parsed month and day values.
pub fn validate_range(field_name: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(CalcError::OutOfRange {
            field: field_name.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CalcError::InvalidInput {
        field: field_name.to_string(),
        value: "None".to_string(),
        reason: "value is required".to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CalcError::ConfigError {
            field: field_name.to_string(),
            message: format!(
                "unsupported value {:?}, expected one of: {}",
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}
