//! Fit check and check history

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use seatcheck_app::app::{self, BagCheckOutcome, BagCheckRequest};
use seatcheck_domain::model::{Airline, BagCheckRecord, Dimensions};
use seatcheck_types::{Unit, VerificationStatus};

use super::{default_unit, lenient_f64, with_repos};
use crate::{
    auth::{CurrentUser, MaybeUser},
    error::ApiError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    airline_iata_code: String,
    flight_number: Option<String>,
    #[serde(deserialize_with = "lenient_f64", alias = "bagLength")]
    bag_length_cm: f64,
    #[serde(deserialize_with = "lenient_f64", alias = "bagWidth")]
    bag_width_cm: f64,
    #[serde(deserialize_with = "lenient_f64", alias = "bagHeight")]
    bag_height_cm: f64,
    #[serde(default = "default_unit")]
    unit: Unit,
    #[serde(default)]
    is_pet_carrier: bool,
    bag_id: Option<String>,
}

/// Airline fields echoed with a verdict
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineSummary {
    name: String,
    iata_code: String,
    verification_status: VerificationStatus,
    source_url: Option<String>,
    max_personal_item_length_cm: Option<f64>,
    max_personal_item_width_cm: Option<f64>,
    max_personal_item_height_cm: Option<f64>,
    pet_carrier_allowed: bool,
    pet_carrier_max_length_cm: Option<f64>,
    pet_carrier_max_width_cm: Option<f64>,
    pet_carrier_max_height_cm: Option<f64>,
}

impl From<Airline> for AirlineSummary {
    fn from(a: Airline) -> Self {
        Self {
            name: a.name,
            iata_code: a.iata_code,
            verification_status: a.verification_status,
            source_url: a.source_url,
            max_personal_item_length_cm: a.max_personal_item_length_cm,
            max_personal_item_width_cm: a.max_personal_item_width_cm,
            max_personal_item_height_cm: a.max_personal_item_height_cm,
            pet_carrier_allowed: a.pet_carrier_allowed,
            pet_carrier_max_length_cm: a.pet_carrier_max_length_cm,
            pet_carrier_max_width_cm: a.pet_carrier_max_width_cm,
            pet_carrier_max_height_cm: a.pet_carrier_max_height_cm,
        }
    }
}

/// Bag dimensions in both units
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagDimensions {
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    length_in: f64,
    width_in: f64,
    height_in: f64,
}

impl From<Dimensions> for BagDimensions {
    fn from(d: Dimensions) -> Self {
        let (length_in, width_in, height_in) = d.to_inches();
        Self {
            length_cm: d.length_cm,
            width_cm: d.width_cm,
            height_cm: d.height_cm,
            length_in,
            width_in,
            height_in,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    fits_under_seat: bool,
    exceeds_in: Vec<String>,
    is_pet_carrier: bool,
    airline: AirlineSummary,
    bag_dimensions: BagDimensions,
    bag_check_id: Option<String>,
}

impl From<BagCheckOutcome> for CheckResponse {
    fn from(outcome: BagCheckOutcome) -> Self {
        Self {
            fits_under_seat: outcome.fits(),
            exceeds_in: outcome.exceeds_in(),
            is_pet_carrier: outcome.is_pet_carrier,
            airline: outcome.airline.into(),
            bag_dimensions: outcome.dimensions.into(),
            bag_check_id: outcome.bag_check_id,
        }
    }
}

pub async fn check_bag(
    State(state): State<AppState>,
    MaybeUser(user_id): MaybeUser,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Json(request) = payload?;
    let dimensions = Dimensions::from_unit(
        request.bag_length_cm,
        request.bag_width_cm,
        request.bag_height_cm,
        request.unit,
    )?;

    let check = BagCheckRequest {
        airline_iata_code: request.airline_iata_code,
        flight_number: request.flight_number,
        dimensions,
        is_pet_carrier: request.is_pet_carrier,
        bag_id: request.bag_id,
        user_id,
    };
    let outcome = with_repos(&state, move |repos| app::check_bag(repos, check)).await?;
    Ok(Json(outcome.into()))
}

pub async fn list_bag_checks(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<BagCheckRecord>>, ApiError> {
    let history = with_repos(&state, move |repos| app::check_history(repos, &user_id)).await?;
    Ok(Json(history))
}
