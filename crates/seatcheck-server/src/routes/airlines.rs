use axum::{
    extract::{Path, State},
    Json,
};

use seatcheck_app::app;
use seatcheck_domain::model::Airline;

use super::with_repos;
use crate::{error::ApiError, state::AppState};

pub async fn list_airlines(State(state): State<AppState>) -> Result<Json<Vec<Airline>>, ApiError> {
    Ok(Json(with_repos(&state, app::list_airlines).await?))
}

pub async fn get_airline(
    State(state): State<AppState>,
    Path(iata_code): Path<String>,
) -> Result<Json<Airline>, ApiError> {
    let airline = with_repos(&state, move |repos| app::get_airline(repos, &iata_code)).await?;
    Ok(Json(airline))
}
