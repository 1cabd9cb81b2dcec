//! Persistence implementations
//!
//! File-based implementations of the repository traits, one JSON file per
//! table under the store directory.

mod file_airline_repo;
mod file_bag_check_repo;
mod file_bag_repo;
mod file_user_bag_repo;
mod json_table;

pub use file_airline_repo::FileAirlineRepository;
pub use file_bag_check_repo::FileBagCheckRepository;
pub use file_bag_repo::FileBagRepository;
pub use file_user_bag_repo::FileUserBagRepository;
