//! Request handlers, grouped by resource

pub mod airlines;
pub mod bag_check;
pub mod bags;
pub mod user_bags;

use serde::{de, Deserialize, Deserializer};

use seatcheck_app::repository::Repositories;
use seatcheck_types::Unit;

use crate::{error::ApiError, state::AppState};

/// Run store work on the blocking pool; the file repositories do synchronous IO
pub(crate) async fn with_repos<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Repositories) -> seatcheck_types::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let repos = state.repos.clone();
    let result = tokio::task::spawn_blocking(move || f(&repos))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(result?)
}

/// Payload dimensions default to centimeters
pub(crate) fn default_unit() -> Unit {
    Unit::Centimeters
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Accept a JSON number or a numeric string
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid number: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Reading {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
    }

    #[test]
    fn test_lenient_f64() {
        let n: Reading = serde_json::from_str(r#"{"value": 45.72}"#).unwrap();
        assert_eq!(n.value, 45.72);
        let s: Reading = serde_json::from_str(r#"{"value": " 20.5 "}"#).unwrap();
        assert_eq!(s.value, 20.5);
        assert!(serde_json::from_str::<Reading>(r#"{"value": "big"}"#).is_err());
        assert!(serde_json::from_str::<Reading>(r#"{"value": true}"#).is_err());
    }

    #[tokio::test]
    async fn test_with_repos_runs_store_work_off_the_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let repos = seatcheck_app::repository::open_repositories_at(dir.path()).unwrap();
        seatcheck_app::app::seed_airlines(repos.airlines.as_ref()).unwrap();
        let state = AppState::new(repos);

        let airlines = with_repos(&state, seatcheck_app::app::list_airlines).await.unwrap();
        assert_eq!(airlines.len(), 6);

        let missing = with_repos(&state, |repos| seatcheck_app::app::get_airline(repos, "ZZ"))
            .await
            .unwrap_err();
        assert_eq!(missing.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
