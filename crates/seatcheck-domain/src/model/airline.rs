//! Airline reference data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatcheck_types::{Error, Result, VerificationStatus};

use super::dimensions::{ensure_positive, Axis, Dimensions};

fn default_true() -> bool {
    true
}

/// An airline and its published under-seat envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: String,
    pub name: String,
    /// Two-letter IATA code, stored uppercase
    pub iata_code: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub max_personal_item_length_cm: Option<f64>,
    #[serde(default)]
    pub max_personal_item_width_cm: Option<f64>,
    #[serde(default)]
    pub max_personal_item_height_cm: Option<f64>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub last_verified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conflict_notes: Option<String>,
    #[serde(default = "default_true")]
    pub pet_carrier_allowed: bool,
    #[serde(default)]
    pub pet_carrier_max_length_cm: Option<f64>,
    #[serde(default)]
    pub pet_carrier_max_width_cm: Option<f64>,
    #[serde(default)]
    pub pet_carrier_max_height_cm: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The limit set the fit evaluator compares against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirlineLimits {
    /// Regular personal-item envelope, when all three values are published
    pub personal_item: Option<Dimensions>,
    pub pet_carrier_allowed: bool,
    /// Pet-carrier envelope, when all three values are published
    pub pet_carrier: Option<Dimensions>,
}

impl Airline {
    /// Build a stored airline from creation data
    pub fn from_new(id: String, new: NewAirline, now: DateTime<Utc>) -> Self {
        let mut airline = Self {
            id,
            name: String::new(),
            iata_code: String::new(),
            logo_url: None,
            max_personal_item_length_cm: None,
            max_personal_item_width_cm: None,
            max_personal_item_height_cm: None,
            verification_status: VerificationStatus::default(),
            source_url: None,
            last_verified_date: None,
            conflict_notes: None,
            pet_carrier_allowed: true,
            pet_carrier_max_length_cm: None,
            pet_carrier_max_width_cm: None,
            pet_carrier_max_height_cm: None,
            created_at: now,
            updated_at: now,
        };
        airline.apply(new, now);
        airline
    }

    /// Replace every descriptive field, keeping id and creation time
    pub fn apply(&mut self, new: NewAirline, now: DateTime<Utc>) {
        self.name = new.name;
        self.iata_code = normalize_iata_code(&new.iata_code);
        self.logo_url = new.logo_url;
        self.max_personal_item_length_cm = new.max_personal_item_length_cm;
        self.max_personal_item_width_cm = new.max_personal_item_width_cm;
        self.max_personal_item_height_cm = new.max_personal_item_height_cm;
        self.verification_status = new.verification_status;
        self.source_url = new.source_url;
        self.last_verified_date = new.last_verified_date;
        self.conflict_notes = new.conflict_notes;
        self.pet_carrier_allowed = new.pet_carrier_allowed;
        self.pet_carrier_max_length_cm = new.pet_carrier_max_length_cm;
        self.pet_carrier_max_width_cm = new.pet_carrier_max_width_cm;
        self.pet_carrier_max_height_cm = new.pet_carrier_max_height_cm;
        self.updated_at = now;
    }

    pub fn personal_item_envelope(&self) -> Option<Dimensions> {
        Dimensions::from_optional(
            self.max_personal_item_length_cm,
            self.max_personal_item_width_cm,
            self.max_personal_item_height_cm,
        )
    }

    pub fn pet_carrier_envelope(&self) -> Option<Dimensions> {
        Dimensions::from_optional(
            self.pet_carrier_max_length_cm,
            self.pet_carrier_max_width_cm,
            self.pet_carrier_max_height_cm,
        )
    }

    pub fn limits(&self) -> AirlineLimits {
        AirlineLimits {
            personal_item: self.personal_item_envelope(),
            pet_carrier_allowed: self.pet_carrier_allowed,
            pet_carrier: self.pet_carrier_envelope(),
        }
    }
}

/// Creation (and full replacement) data for an airline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAirline {
    pub name: String,
    #[serde(alias = "iata_code")]
    pub iata_code: String,
    #[serde(default, alias = "logo_url")]
    pub logo_url: Option<String>,
    #[serde(default, alias = "max_personal_item_length_cm")]
    pub max_personal_item_length_cm: Option<f64>,
    #[serde(default, alias = "max_personal_item_width_cm")]
    pub max_personal_item_width_cm: Option<f64>,
    #[serde(default, alias = "max_personal_item_height_cm")]
    pub max_personal_item_height_cm: Option<f64>,
    #[serde(default, alias = "verification_status")]
    pub verification_status: VerificationStatus,
    #[serde(default, alias = "source_url")]
    pub source_url: Option<String>,
    #[serde(default, alias = "last_verified_date")]
    pub last_verified_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "conflict_notes")]
    pub conflict_notes: Option<String>,
    #[serde(default = "default_true", alias = "pet_carrier_allowed")]
    pub pet_carrier_allowed: bool,
    #[serde(default, alias = "pet_carrier_max_length_cm")]
    pub pet_carrier_max_length_cm: Option<f64>,
    #[serde(default, alias = "pet_carrier_max_width_cm")]
    pub pet_carrier_max_width_cm: Option<f64>,
    #[serde(default, alias = "pet_carrier_max_height_cm")]
    pub pet_carrier_max_height_cm: Option<f64>,
}

impl NewAirline {
    /// Minimal airline with no published data
    pub fn new(name: impl Into<String>, iata_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iata_code: iata_code.into(),
            logo_url: None,
            max_personal_item_length_cm: None,
            max_personal_item_width_cm: None,
            max_personal_item_height_cm: None,
            verification_status: VerificationStatus::default(),
            source_url: None,
            last_verified_date: None,
            conflict_notes: None,
            pet_carrier_allowed: true,
            pet_carrier_max_length_cm: None,
            pet_carrier_max_width_cm: None,
            pet_carrier_max_height_cm: None,
        }
    }

    pub fn with_personal_item(mut self, dims: Dimensions) -> Self {
        self.max_personal_item_length_cm = Some(dims.length_cm);
        self.max_personal_item_width_cm = Some(dims.width_cm);
        self.max_personal_item_height_cm = Some(dims.height_cm);
        self
    }

    pub fn with_pet_carrier(mut self, dims: Dimensions) -> Self {
        self.pet_carrier_max_length_cm = Some(dims.length_cm);
        self.pet_carrier_max_width_cm = Some(dims.width_cm);
        self.pet_carrier_max_height_cm = Some(dims.height_cm);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("airline name is required".to_string()));
        }
        let code = normalize_iata_code(&self.iata_code);
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidInput(format!(
                "IATA code must be two letters or digits, got '{}'",
                self.iata_code
            )));
        }

        let fields = [
            (Axis::Length, self.max_personal_item_length_cm),
            (Axis::Width, self.max_personal_item_width_cm),
            (Axis::Height, self.max_personal_item_height_cm),
            (Axis::Length, self.pet_carrier_max_length_cm),
            (Axis::Width, self.pet_carrier_max_width_cm),
            (Axis::Height, self.pet_carrier_max_height_cm),
        ];
        for (axis, value) in fields {
            if let Some(value) = value {
                ensure_positive(axis, value)?;
            }
        }
        Ok(())
    }
}

/// Canonical form of an IATA code used for lookups
pub fn normalize_iata_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
