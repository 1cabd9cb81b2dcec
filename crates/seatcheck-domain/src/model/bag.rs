//! Bag catalogue entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatcheck_types::{CarrierType, Result};

use super::dimensions::Dimensions;

/// A physical bag model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bag {
    pub id: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub is_pet_carrier: bool,
    #[serde(default)]
    pub carrier_type: Option<CarrierType>,
    /// Curated reference bag, as opposed to user-entered
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bag {
    pub fn from_new(id: String, new: NewBag, now: DateTime<Utc>) -> Self {
        Self {
            id,
            brand: new.brand,
            model: new.model,
            dimensions: new.dimensions,
            is_pet_carrier: new.is_pet_carrier,
            carrier_type: new.carrier_type,
            is_verified: new.is_verified,
            image_url: new.image_url,
            source_url: new.source_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// "Brand Model", falling back to whichever half is known
    pub fn display_name(&self) -> String {
        match (self.brand.as_deref(), self.model.as_deref()) {
            (Some(brand), Some(model)) => format!("{} {}", brand, model),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => "Custom bag".to_string(),
        }
    }
}

/// Creation data for a bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBag {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub is_pet_carrier: bool,
    #[serde(default)]
    pub carrier_type: Option<CarrierType>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl NewBag {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            brand: None,
            model: None,
            dimensions,
            is_pet_carrier: false,
            carrier_type: None,
            is_verified: false,
            image_url: None,
            source_url: None,
        }
    }

    pub fn with_name(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self.model = Some(model.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate()
    }
}
