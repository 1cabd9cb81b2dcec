//! Application use cases

pub mod catalog_service;
pub mod check_service;
pub mod history_service;
pub mod user_bag_service;

pub use catalog_service::{
    create_bag, get_airline, import_airlines, import_bags, list_airlines, list_bags, search_bag,
    seed_airlines, ImportSummary, MANUAL_ENTRY_MESSAGE,
};
pub use check_service::{check_bag, BagCheckOutcome, BagCheckRequest};
pub use history_service::{all_check_history, check_history, summarize, HistorySummary};
pub use user_bag_service::{list_user_bags, remove_user_bag, rename_user_bag, save_user_bag};
