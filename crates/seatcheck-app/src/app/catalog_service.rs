//! Airline and bag catalogue use cases

use chrono::Utc;
use tracing::{info, warn};

use seatcheck_domain::model::{normalize_iata_code, Airline, Bag, NewAirline, NewBag};
use seatcheck_domain::repository::AirlineRepository;
use seatcheck_types::{Error, Result};

use crate::constants::default_airlines;
use crate::repository::Repositories;

/// Returned with an empty result when a bag search finds nothing
pub const MANUAL_ENTRY_MESSAGE: &str = "Bag not found in database. Please enter dimensions manually.";

/// Counts from an airline dataset import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
}

/// Insert the built-in airlines when the store has none.
///
/// Returns the number of airlines inserted.
pub fn seed_airlines(repo: &dyn AirlineRepository) -> Result<usize> {
    if !repo.find_all()?.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let mut inserted = 0;
    for mut airline in default_airlines() {
        airline.last_verified_date.get_or_insert(now);
        repo.create(airline)?;
        inserted += 1;
    }
    info!(count = inserted, "initialized airline data");
    Ok(inserted)
}

/// Create or replace airlines by IATA code
pub fn import_airlines(repo: &dyn AirlineRepository, airlines: Vec<NewAirline>) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    for airline in airlines {
        match repo.find_by_iata_code(&airline.iata_code)? {
            Some(existing) => {
                repo.update(&existing.id, airline)?;
                summary.updated += 1;
            }
            None => {
                repo.create(airline)?;
                summary.created += 1;
            }
        }
    }
    info!(created = summary.created, updated = summary.updated, "imported airlines");
    Ok(summary)
}

pub fn list_airlines(repos: &Repositories) -> Result<Vec<Airline>> {
    repos.airlines.find_all()
}

pub fn get_airline(repos: &Repositories, iata_code: &str) -> Result<Airline> {
    repos
        .airlines
        .find_by_iata_code(iata_code)?
        .ok_or_else(|| Error::AirlineNotFound(normalize_iata_code(iata_code)))
}

pub fn list_bags(repos: &Repositories) -> Result<Vec<Bag>> {
    repos.bags.find_all()
}

pub fn create_bag(repos: &Repositories, bag: NewBag) -> Result<Bag> {
    let created = repos.bags.create(bag)?;
    info!(bag_id = %created.id, name = %created.display_name(), "created bag");
    Ok(created)
}

/// Bulk-create bags, returning how many were stored
pub fn import_bags(repos: &Repositories, bags: Vec<NewBag>) -> Result<usize> {
    let mut stored = 0;
    for bag in bags {
        repos.bags.create(bag)?;
        stored += 1;
    }
    Ok(stored)
}

/// First catalogue bag of `brand` whose model contains `model` (case-insensitive)
pub fn search_bag(repos: &Repositories, brand: &str, model: &str) -> Result<Option<Bag>> {
    let (brand, model) = (brand.trim(), model.trim());
    if brand.is_empty() || model.is_empty() {
        return Err(Error::InvalidInput("Brand and model are required".to_string()));
    }

    let needle = model.to_lowercase();
    let found = repos
        .bags
        .search_by_brand(brand)?
        .into_iter()
        .find(|bag| {
            bag.model
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains(&needle))
        });
    if found.is_none() {
        warn!(brand, model, "bag not found in catalogue");
    }
    Ok(found)
}
