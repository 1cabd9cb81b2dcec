//! Error types for seatcheck

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store lock poisoned: {0}")]
    Poisoned(&'static str),

    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Airline not found: {0}")]
    AirlineNotFound(String),

    #[error("Bag not found: {0}")]
    BagNotFound(String),

    #[error("User bag not found: {0}")]
    UserBagNotFound(String),

    /// The airline has no complete personal-item envelope on record.
    #[error("Airline dimensions not available for {0}")]
    DimensionsUnavailable(String),

    #[error("Invalid {axis}: {value} (must be a positive number)")]
    InvalidDimension { axis: &'static str, value: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::DimensionsUnavailable(_)
                | Error::InvalidDimension { .. }
                | Error::InvalidInput(_)
                | Error::Store(StoreError::Duplicate(_))
        )
    }

    /// Whether the error means a looked-up record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::AirlineNotFound(_) | Error::BagNotFound(_) | Error::UserBagNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::AirlineNotFound("ZZ".into()).is_not_found());
        assert!(!Error::AirlineNotFound("ZZ".into()).is_validation());
        assert!(Error::DimensionsUnavailable("XX".into()).is_validation());
        assert!(Error::InvalidDimension { axis: "length", value: -1.0 }.is_validation());
        assert!(!Error::Excel("boom".into()).is_validation());
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = Error::InvalidDimension { axis: "width", value: 0.0 };
        assert_eq!(err.to_string(), "Invalid width: 0 (must be a positive number)");
    }
}
