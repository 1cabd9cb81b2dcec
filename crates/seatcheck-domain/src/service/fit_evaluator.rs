//! Under-seat fit evaluation
//!
//! Compares a bag against an airline's personal-item or pet-carrier
//! envelope. Pure function of its inputs; the comparison is inclusive, so a
//! bag exactly at the limit fits.

use serde::Serialize;

use seatcheck_types::{Error, Result};

use crate::model::{Airline, AirlineLimits, Axis, Dimensions};

pub const PET_CARRIERS_NOT_ALLOWED: &str = "Pet carriers not allowed";
pub const PET_CARRIER_POLICY_UNCLEAR: &str = "Pet carrier policy unclear";

/// Outcome of a fit check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "axes", rename_all = "snake_case")]
pub enum FitVerdict {
    Fits,
    /// Exceeded axes, always in length, width, height order
    Exceeds(Vec<Axis>),
    PetCarriersNotAllowed,
    /// Carriers are allowed but the airline publishes no carrier envelope
    PetCarrierPolicyUnclear,
}

impl FitVerdict {
    pub fn fits(&self) -> bool {
        matches!(self, FitVerdict::Fits)
    }

    /// Sentinel reason for categorical (non-dimensional) failures
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            FitVerdict::PetCarriersNotAllowed => Some(PET_CARRIERS_NOT_ALLOWED),
            FitVerdict::PetCarrierPolicyUnclear => Some(PET_CARRIER_POLICY_UNCLEAR),
            FitVerdict::Fits | FitVerdict::Exceeds(_) => None,
        }
    }

    /// Flat list form: axis names, or the single sentinel reason
    pub fn exceeds_in(&self) -> Vec<String> {
        match self {
            FitVerdict::Fits => Vec::new(),
            FitVerdict::Exceeds(axes) => axes.iter().map(|a| a.name().to_string()).collect(),
            other => other.reason().map(str::to_string).into_iter().collect(),
        }
    }
}

/// Evaluate a bag (centimeters, already validated) against an airline's limits.
///
/// Returns `None` when a regular personal item is checked against an airline
/// without a complete personal-item envelope; callers must reject that
/// request instead of inventing a verdict.
pub fn evaluate_fit(bag: &Dimensions, is_pet_carrier: bool, limits: &AirlineLimits) -> Option<FitVerdict> {
    if is_pet_carrier {
        if !limits.pet_carrier_allowed {
            return Some(FitVerdict::PetCarriersNotAllowed);
        }
        // No fallback to the regular envelope
        return Some(match &limits.pet_carrier {
            Some(max) => compare(bag, max),
            None => FitVerdict::PetCarrierPolicyUnclear,
        });
    }

    limits.personal_item.as_ref().map(|max| compare(bag, max))
}

/// [`evaluate_fit`] against a stored airline, mapping a missing envelope to
/// [`Error::DimensionsUnavailable`].
pub fn check_airline(bag: &Dimensions, is_pet_carrier: bool, airline: &Airline) -> Result<FitVerdict> {
    evaluate_fit(bag, is_pet_carrier, &airline.limits())
        .ok_or_else(|| Error::DimensionsUnavailable(airline.iata_code.clone()))
}

fn compare(bag: &Dimensions, max: &Dimensions) -> FitVerdict {
    let exceeded: Vec<Axis> = Axis::ALL
        .into_iter()
        .filter(|&axis| bag.get(axis) > max.get(axis))
        .collect();

    if exceeded.is_empty() {
        FitVerdict::Fits
    } else {
        FitVerdict::Exceeds(exceeded)
    }
}
