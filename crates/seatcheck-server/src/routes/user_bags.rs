//! Saved bags of the identified user

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use seatcheck_app::app;
use seatcheck_domain::model::{UserBag, UserBagWithBag};

use super::with_repos;
use crate::{auth::CurrentUser, error::ApiError, state::AppState};

pub async fn list_user_bags(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<UserBagWithBag>>, ApiError> {
    let user_bags = with_repos(&state, move |repos| app::list_user_bags(repos, &user_id)).await?;
    Ok(Json(user_bags))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserBagRequest {
    bag_id: String,
    custom_name: Option<String>,
}

pub async fn add_user_bag(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<AddUserBagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserBag>), ApiError> {
    let Json(request) = payload?;
    let user_bag = with_repos(&state, move |repos| {
        app::save_user_bag(repos, &user_id, &request.bag_id, request.custom_name)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(user_bag)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameUserBagRequest {
    custom_name: String,
}

pub async fn rename_user_bag(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(user_bag_id): Path<String>,
    payload: Result<Json<RenameUserBagRequest>, JsonRejection>,
) -> Result<Json<UserBag>, ApiError> {
    let Json(request) = payload?;
    let user_bag = with_repos(&state, move |repos| {
        app::rename_user_bag(repos, &user_id, &user_bag_id, &request.custom_name)
    })
    .await?;
    Ok(Json(user_bag))
}

/// Removes by catalogue bag id
pub async fn remove_user_bag(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(bag_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    with_repos(&state, move |repos| app::remove_user_bag(repos, &user_id, &bag_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
