//! Domain services

pub mod fit_evaluator;
pub mod units;

pub use fit_evaluator::{
    check_airline, evaluate_fit, FitVerdict, PET_CARRIERS_NOT_ALLOWED, PET_CARRIER_POLICY_UNCLEAR,
};
pub use units::{cm_to_inches, inches_to_cm, to_centimeters, CM_PER_INCH};
