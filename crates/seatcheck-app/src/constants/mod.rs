//! Built-in reference data

pub mod airlines;

pub use airlines::default_airlines;
