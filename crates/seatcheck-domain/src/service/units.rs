//! Centimeter / inch conversion
//!
//! Values are rounded to two decimals after the conversion arithmetic, so a
//! cm -> in -> cm round trip may drift by a few hundredths of a centimeter.

use seatcheck_types::Unit;

pub const CM_PER_INCH: f64 = 2.54;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn cm_to_inches(cm: f64) -> f64 {
    round2(cm / CM_PER_INCH)
}

pub fn inches_to_cm(inches: f64) -> f64 {
    round2(inches * CM_PER_INCH)
}

/// Normalize a value entered in `unit` to centimeters.
///
/// Centimeter input passes through untouched.
pub fn to_centimeters(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inches => inches_to_cm(value),
        Unit::Centimeters => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_cm_common_limits() {
        assert_eq!(inches_to_cm(18.0), 45.72);
        assert_eq!(inches_to_cm(14.0), 35.56);
        assert_eq!(inches_to_cm(8.0), 20.32);
        assert_eq!(inches_to_cm(18.5), 46.99);
    }

    #[test]
    fn test_cm_to_inches_rounds_after_division() {
        assert_eq!(cm_to_inches(45.72), 18.0);
        assert_eq!(cm_to_inches(50.0), 19.69);
        assert_eq!(cm_to_inches(1.0), 0.39);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut cm = 0.5;
        while cm < 200.0 {
            let back = inches_to_cm(cm_to_inches(cm));
            assert!((back - cm).abs() < 0.1, "{} -> {}", cm, back);
            cm += 0.37;
        }
    }

    #[test]
    fn test_to_centimeters() {
        assert_eq!(to_centimeters(10.0, Unit::Inches), 25.4);
        assert_eq!(to_centimeters(33.333, Unit::Centimeters), 33.333);
    }
}
