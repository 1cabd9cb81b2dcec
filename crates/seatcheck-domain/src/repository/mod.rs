//! Repository trait definitions for data persistence

use crate::model::{
    Airline, Bag, BagCheck, NewAirline, NewBag, NewBagCheck, NewUserBag, UserBag,
};
use seatcheck_types::Error;

/// Repository for airline reference data
pub trait AirlineRepository: Send + Sync {
    /// Find all airlines, sorted by name
    fn find_all(&self) -> Result<Vec<Airline>, Error>;

    /// Find an airline by IATA code (case-insensitive)
    fn find_by_iata_code(&self, iata_code: &str) -> Result<Option<Airline>, Error>;

    /// Find an airline by id
    fn find_by_id(&self, id: &str) -> Result<Option<Airline>, Error>;

    /// Create an airline; the IATA code must be unused
    fn create(&self, airline: NewAirline) -> Result<Airline, Error>;

    /// Replace an airline's descriptive fields
    fn update(&self, id: &str, airline: NewAirline) -> Result<Airline, Error>;
}

/// Repository for the bag catalogue
pub trait BagRepository: Send + Sync {
    /// Find all bags
    fn find_all(&self) -> Result<Vec<Bag>, Error>;

    /// Find a bag by id
    fn find_by_id(&self, id: &str) -> Result<Option<Bag>, Error>;

    /// Find bags of a brand (case-insensitive), sorted by model
    fn search_by_brand(&self, brand: &str) -> Result<Vec<Bag>, Error>;

    /// Create a bag
    fn create(&self, bag: NewBag) -> Result<Bag, Error>;
}

/// Repository for bags saved by users
pub trait UserBagRepository: Send + Sync {
    /// Find a user's saved bags, newest first
    fn find_by_user(&self, user_id: &str) -> Result<Vec<UserBag>, Error>;

    /// Save a bag for a user
    fn add(&self, user_bag: NewUserBag) -> Result<UserBag, Error>;

    /// Rename one of the user's saved bags
    fn rename(&self, user_id: &str, user_bag_id: &str, custom_name: &str) -> Result<UserBag, Error>;

    /// Remove a bag from the user's list; returns whether anything was removed
    fn remove(&self, user_id: &str, bag_id: &str) -> Result<bool, Error>;
}

/// Repository for bag check audit records
pub trait BagCheckRepository: Send + Sync {
    /// Record a check
    fn create(&self, check: NewBagCheck) -> Result<BagCheck, Error>;

    /// Find a user's checks, newest first
    fn find_by_user(&self, user_id: &str) -> Result<Vec<BagCheck>, Error>;

    /// Find all checks, newest first
    fn find_all(&self) -> Result<Vec<BagCheck>, Error>;
}
