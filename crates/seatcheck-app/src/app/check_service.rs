//! Bag Check Service - the fit check use case
//!
//! 1. Look up the airline by IATA code
//! 2. Evaluate the (already validated) dimensions against its envelope
//! 3. Record an audit entry when the caller is identified
//! 4. Return the verdict with the airline and normalized dimensions

use serde::Serialize;
use tracing::{debug, info};

use seatcheck_domain::model::{Airline, Dimensions, NewBagCheck};
use seatcheck_domain::service::{check_airline, FitVerdict};
use seatcheck_types::{Error, Result};

use crate::repository::Repositories;

/// A fit check request with dimensions normalized to centimeters
#[derive(Debug, Clone)]
pub struct BagCheckRequest {
    pub airline_iata_code: String,
    pub flight_number: Option<String>,
    pub dimensions: Dimensions,
    pub is_pet_carrier: bool,
    /// Catalogue bag the dimensions came from
    pub bag_id: Option<String>,
    /// Identified caller; anonymous checks are not recorded
    pub user_id: Option<String>,
}

impl BagCheckRequest {
    pub fn new(airline_iata_code: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            airline_iata_code: airline_iata_code.into(),
            flight_number: None,
            dimensions,
            is_pet_carrier: false,
            bag_id: None,
            user_id: None,
        }
    }

    pub fn pet_carrier(mut self, is_pet_carrier: bool) -> Self {
        self.is_pet_carrier = is_pet_carrier;
        self
    }

    pub fn for_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

/// Result of a fit check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagCheckOutcome {
    pub verdict: FitVerdict,
    pub airline: Airline,
    pub dimensions: Dimensions,
    pub is_pet_carrier: bool,
    pub bag_check_id: Option<String>,
}

impl BagCheckOutcome {
    pub fn fits(&self) -> bool {
        self.verdict.fits()
    }

    pub fn exceeds_in(&self) -> Vec<String> {
        self.verdict.exceeds_in()
    }
}

/// Run a fit check
pub fn check_bag(repos: &Repositories, request: BagCheckRequest) -> Result<BagCheckOutcome> {
    let airline = repos
        .airlines
        .find_by_iata_code(&request.airline_iata_code)?
        .ok_or_else(|| Error::AirlineNotFound(request.airline_iata_code.clone()))?;

    if let Some(ref bag_id) = request.bag_id {
        if repos.bags.find_by_id(bag_id)?.is_none() {
            return Err(Error::BagNotFound(bag_id.clone()));
        }
    }

    let verdict = check_airline(&request.dimensions, request.is_pet_carrier, &airline)?;
    debug!(
        airline = %airline.iata_code,
        dimensions = %request.dimensions,
        pet_carrier = request.is_pet_carrier,
        ?verdict,
        "evaluated bag"
    );

    let bag_check_id = match request.user_id.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(user_id) => {
            let record = repos.bag_checks.create(NewBagCheck {
                user_id: Some(user_id.to_string()),
                bag_id: request.bag_id.clone(),
                airline_id: airline.id.clone(),
                flight_number: request.flight_number.clone(),
                dimensions: request.dimensions,
                is_pet_carrier: request.is_pet_carrier,
                fits_under_seat: verdict.fits(),
            })?;
            info!(bag_check_id = %record.id, fits = record.fits_under_seat, "recorded bag check");
            Some(record.id)
        }
        None => None,
    };

    Ok(BagCheckOutcome {
        verdict,
        airline,
        dimensions: request.dimensions,
        is_pet_carrier: request.is_pet_carrier,
        bag_check_id,
    })
}
