//! Audit records of fit checks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::airline::Airline;
use super::bag::Bag;
use super::dimensions::Dimensions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagCheck {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bag_id: Option<String>,
    pub airline_id: String,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub is_pet_carrier: bool,
    pub fits_under_seat: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBagCheck {
    pub user_id: Option<String>,
    pub bag_id: Option<String>,
    pub airline_id: String,
    pub flight_number: Option<String>,
    pub dimensions: Dimensions,
    pub is_pet_carrier: bool,
    pub fits_under_seat: bool,
}

impl BagCheck {
    pub fn from_new(id: String, new: NewBagCheck, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            bag_id: new.bag_id,
            airline_id: new.airline_id,
            flight_number: new.flight_number,
            dimensions: new.dimensions,
            is_pet_carrier: new.is_pet_carrier,
            fits_under_seat: new.fits_under_seat,
            created_at: now,
        }
    }
}

/// A check joined with its airline and, when known, the bag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagCheckRecord {
    #[serde(flatten)]
    pub check: BagCheck,
    pub airline: Airline,
    pub bag: Option<Bag>,
}
