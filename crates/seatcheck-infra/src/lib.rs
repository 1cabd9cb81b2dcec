//! Infrastructure layer - file-backed repositories and dataset loaders

pub mod airline_loader;
pub mod bag_csv;
pub mod persistence;
