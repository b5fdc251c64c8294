use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    #[error("Invalid measurement: {field} must be finite and strictly positive, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },
}

impl SortError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            SortError::InvalidMeasurement { field, .. } => format!(
                "Re-measure the package and pass a {} greater than zero",
                field
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::InvalidMeasurement { field, value } => {
                format!("The package {} ({}) is not a valid measurement", field, value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
