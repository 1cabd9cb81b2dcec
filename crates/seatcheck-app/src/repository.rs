//! Repository adapters for persistence layer

use std::path::Path;
use std::sync::Arc;

use seatcheck_domain::repository::{
    AirlineRepository, BagCheckRepository, BagRepository, UserBagRepository,
};
use seatcheck_infra::persistence::{
    FileAirlineRepository, FileBagCheckRepository, FileBagRepository, FileUserBagRepository,
};
use seatcheck_types::Result;
use tracing::info;

use crate::config::Config;

/// Shared handles to every repository, cheap to clone
#[derive(Clone)]
pub struct Repositories {
    pub airlines: Arc<dyn AirlineRepository>,
    pub bags: Arc<dyn BagRepository>,
    pub user_bags: Arc<dyn UserBagRepository>,
    pub bag_checks: Arc<dyn BagCheckRepository>,
}

/// Open every repository under the configured data directory
pub fn open_repositories(config: &Config) -> Result<Repositories> {
    open_repositories_at(&config.data_dir()?)
}

/// Open every repository under a custom directory
pub fn open_repositories_at(store_dir: &Path) -> Result<Repositories> {
    info!(store_dir = %store_dir.display(), "opening data store");
    Ok(Repositories {
        airlines: Arc::new(FileAirlineRepository::open(store_dir)?),
        bags: Arc::new(FileBagRepository::open(store_dir)?),
        user_bags: Arc::new(FileUserBagRepository::open(store_dir)?),
        bag_checks: Arc::new(FileBagCheckRepository::open(store_dir)?),
    })
}
