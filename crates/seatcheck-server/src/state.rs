use std::path::PathBuf;

use seatcheck_app::config::Config;
use seatcheck_app::repository::Repositories;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    /// Built front-end assets, if any
    pub static_dir: Option<PathBuf>,
    pub asset_max_age_secs: u64,
}

impl AppState {
    /// API-only state
    pub fn new(repos: Repositories) -> Self {
        Self {
            repos,
            static_dir: None,
            asset_max_age_secs: Config::default().asset_max_age_secs,
        }
    }

    pub fn from_config(config: &Config, repos: Repositories) -> Self {
        Self {
            repos,
            static_dir: config.static_dir.clone(),
            asset_max_age_secs: config.asset_max_age_secs,
        }
    }
}
