//! Core types for seatcheck

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Length unit a traveler enters dimensions in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    #[value(name = "in")]
    #[serde(rename = "in")]
    Inches,
    #[value(name = "cm")]
    #[serde(rename = "cm")]
    Centimeters,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            "cm" | "centimeter" | "centimeters" => Ok(Unit::Centimeters),
            other => Err(Error::InvalidInput(format!("unknown unit '{}'", other))),
        }
    }
}

/// Provenance of an airline's published dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Confirmed against the airline's own published policy
    VerifiedOfficial,
    /// Conservative estimate from secondary sources
    UnverifiedConservative,
    #[default]
    NeedsReview,
}

impl VerificationStatus {
    /// Short badge label
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::VerifiedOfficial => "Verified",
            VerificationStatus::UnverifiedConservative => "Unverified",
            VerificationStatus::NeedsReview => "Review Needed",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Construction of a pet carrier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarrierType {
    HardSided,
    SoftSided,
}

impl std::str::FromStr for CarrierType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard-sided" | "hard" => Ok(CarrierType::HardSided),
            "soft-sided" | "soft" => Ok(CarrierType::SoftSided),
            other => Err(Error::InvalidInput(format!("unknown carrier type '{}'", other))),
        }
    }
}
