//! Domain layer for seatcheck
//!
//! Airline and bag models, the fit evaluator, unit conversion and the
//! repository traits the persistence layer implements.

pub mod model;
pub mod repository;
pub mod service;
