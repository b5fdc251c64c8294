use crate::utils::error::{Result, SortError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negatives, NaN and infinities.
pub fn validate_positive_measurement(field_name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SortError::InvalidMeasurement {
            field: field_name,
            value,
        })
    }
}
