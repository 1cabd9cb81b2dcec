//! Caller identity
//!
//! Authentication happens upstream; the identity provider forwards the
//! authenticated user id in the `x-user-id` header.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

fn user_id(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// An identified caller; rejects with 401 otherwise
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id(parts).map(CurrentUser).ok_or(ApiError::Unauthorized)
    }
}

/// Identity when present; anonymous callers are allowed
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(user_id(parts)))
    }
}
