use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use seatcheck_app::app::{self, MANUAL_ENTRY_MESSAGE};
use seatcheck_domain::model::{Bag, Dimensions, NewBag};
use seatcheck_types::{CarrierType, Unit};

use super::{default_unit, lenient_f64, with_repos};
use crate::{error::ApiError, state::AppState};

pub async fn list_bags(State(state): State<AppState>) -> Result<Json<Vec<Bag>>, ApiError> {
    Ok(Json(with_repos(&state, app::list_bags).await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    brand: Option<String>,
    model: Option<String>,
}

/// The matching bag, or a manual-entry message with no results
pub async fn search_bags(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let brand = params.brand.unwrap_or_default();
    let model = params.model.unwrap_or_default();

    match with_repos(&state, move |repos| app::search_bag(repos, &brand, &model)).await? {
        Some(bag) => Ok(Json(bag).into_response()),
        None => Ok(Json(json!({
            "message": MANUAL_ENTRY_MESSAGE,
            "searchResults": [],
        }))
        .into_response()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBagRequest {
    brand: Option<String>,
    model: Option<String>,
    #[serde(deserialize_with = "lenient_f64", alias = "length")]
    length_cm: f64,
    #[serde(deserialize_with = "lenient_f64", alias = "width")]
    width_cm: f64,
    #[serde(deserialize_with = "lenient_f64", alias = "height")]
    height_cm: f64,
    #[serde(default = "default_unit")]
    unit: Unit,
    #[serde(default)]
    is_pet_carrier: bool,
    carrier_type: Option<CarrierType>,
    #[serde(default)]
    is_verified: bool,
    image_url: Option<String>,
    source_url: Option<String>,
}

impl CreateBagRequest {
    fn into_new_bag(self) -> seatcheck_types::Result<NewBag> {
        let dimensions = Dimensions::from_unit(self.length_cm, self.width_cm, self.height_cm, self.unit)?;
        Ok(NewBag {
            brand: self.brand,
            model: self.model,
            dimensions,
            is_pet_carrier: self.is_pet_carrier,
            carrier_type: self.carrier_type,
            is_verified: self.is_verified,
            image_url: self.image_url,
            source_url: self.source_url,
        })
    }
}

pub async fn create_bag(
    State(state): State<AppState>,
    payload: Result<Json<CreateBagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Bag>), ApiError> {
    let Json(request) = payload?;
    let new_bag = request.into_new_bag()?;
    let bag = with_repos(&state, move |repos| app::create_bag(repos, new_bag)).await?;
    Ok((StatusCode::CREATED, Json(bag)))
}
