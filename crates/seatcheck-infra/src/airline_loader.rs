//! Airline dataset loader from TOML
//!
//! ```toml
//! [[airlines]]
//! name = "JetBlue Airways"
//! iata_code = "B6"
//! max_personal_item_length_cm = 43.18
//! max_personal_item_width_cm = 33.02
//! max_personal_item_height_cm = 20.32
//! verification_status = "VERIFIED_OFFICIAL"
//! last_verified_date = "2025-01-15T00:00:00Z"
//! pet_carrier_allowed = true
//! ```
//!
//! Timestamps are quoted RFC 3339 strings.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use seatcheck_domain::model::{normalize_iata_code, NewAirline};
use seatcheck_types::{ConfigError, Error, Result};

/// Container for parsing an airline dataset file
#[derive(Debug, Deserialize)]
struct AirlineDatasetFile {
    #[serde(default)]
    airlines: Vec<NewAirline>,
}

/// Validated airline dataset, keyed by IATA code
#[derive(Debug)]
pub struct AirlineDataset {
    airlines: HashMap<String, NewAirline>,
}

impl AirlineDataset {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read airline dataset {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: AirlineDatasetFile = toml::from_str(toml_content)?;

        let mut airlines = HashMap::new();
        for airline in file.airlines {
            airline.validate()?;
            let code = normalize_iata_code(&airline.iata_code);
            if airlines.insert(code.clone(), airline).is_some() {
                return Err(Error::InvalidInput(format!(
                    "airline {} listed more than once",
                    code
                )));
            }
        }

        Ok(Self { airlines })
    }

    pub fn get(&self, iata_code: &str) -> Option<&NewAirline> {
        self.airlines.get(&normalize_iata_code(iata_code))
    }

    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }

    /// Airlines sorted by IATA code
    pub fn into_airlines(self) -> Vec<NewAirline> {
        let mut airlines: Vec<_> = self.airlines.into_iter().collect();
        airlines.sort_by(|a, b| a.0.cmp(&b.0));
        airlines.into_iter().map(|(_, airline)| airline).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatcheck_types::VerificationStatus;

    const DATASET: &str = r#"
[[airlines]]
name = "JetBlue Airways"
iata_code = "b6"
max_personal_item_length_cm = 43.18
max_personal_item_width_cm = 33.02
max_personal_item_height_cm = 20.32
verification_status = "VERIFIED_OFFICIAL"
last_verified_date = "2025-01-15T00:00:00Z"

[[airlines]]
name = "Spirit Airlines"
iata_code = "NK"
pet_carrier_allowed = false
"#;

    #[test]
    fn test_load_from_str() {
        let dataset = AirlineDataset::load_from_str(DATASET).unwrap();
        assert_eq!(dataset.len(), 2);

        let jetblue = dataset.get("B6").unwrap();
        assert_eq!(jetblue.max_personal_item_width_cm, Some(33.02));
        assert_eq!(jetblue.verification_status, VerificationStatus::VerifiedOfficial);
        assert!(jetblue.pet_carrier_allowed);
        assert!(jetblue.last_verified_date.is_some());

        let spirit = dataset.get("nk").unwrap();
        assert!(!spirit.pet_carrier_allowed);
        assert_eq!(spirit.verification_status, VerificationStatus::NeedsReview);
    }

    #[test]
    fn test_into_airlines_sorted() {
        let dataset = AirlineDataset::load_from_str(DATASET).unwrap();
        let codes: Vec<_> = dataset
            .into_airlines()
            .into_iter()
            .map(|a| normalize_iata_code(&a.iata_code))
            .collect();
        assert_eq!(codes, vec!["B6", "NK"]);
    }

    #[test]
    fn test_rejects_duplicates_and_invalid_values() {
        let dup = r#"
[[airlines]]
name = "A"
iata_code = "AA"
[[airlines]]
name = "B"
iata_code = "aa"
"#;
        assert!(AirlineDataset::load_from_str(dup).is_err());

        let negative = r#"
[[airlines]]
name = "A"
iata_code = "AA"
max_personal_item_length_cm = -1.0
"#;
        assert!(AirlineDataset::load_from_str(negative).is_err());
        assert!(AirlineDataset::load_from_str("airlines = 3").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AirlineDataset::load_from_file(Path::new("/nonexistent/airlines.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
