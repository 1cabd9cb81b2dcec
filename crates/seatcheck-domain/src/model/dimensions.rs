//! Three-axis bag and envelope dimensions

use serde::{Deserialize, Serialize};

use seatcheck_types::{Error, Result, Unit};

use crate::service::units::{cm_to_inches, to_centimeters};

/// Measurement axis, in the fixed reporting order length, width, height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Length, width and height in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    /// Build validated dimensions from centimeter values
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Result<Self> {
        let dims = Self {
            length_cm,
            width_cm,
            height_cm,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Build validated dimensions from values entered in `unit`
    pub fn from_unit(length: f64, width: f64, height: f64, unit: Unit) -> Result<Self> {
        // Reject bad raw input before conversion can mask it (NaN, negatives)
        for (axis, value) in Axis::ALL.into_iter().zip([length, width, height]) {
            ensure_positive(axis, value)?;
        }
        Self::new(
            to_centimeters(length, unit),
            to_centimeters(width, unit),
            to_centimeters(height, unit),
        )
    }

    /// Every axis must be a positive finite number
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            ensure_positive(axis, self.get(axis))?;
        }
        Ok(())
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length_cm,
            Axis::Width => self.width_cm,
            Axis::Height => self.height_cm,
        }
    }

    /// Inch equivalents (length, width, height), rounded to two decimals
    pub fn to_inches(&self) -> (f64, f64, f64) {
        (
            cm_to_inches(self.length_cm),
            cm_to_inches(self.width_cm),
            cm_to_inches(self.height_cm),
        )
    }

    /// Build an envelope only when all three values are published
    pub fn from_optional(
        length_cm: Option<f64>,
        width_cm: Option<f64>,
        height_cm: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            length_cm: length_cm?,
            width_cm: width_cm?,
            height_cm: height_cm?,
        })
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} x {:.2} cm",
            self.length_cm, self.width_cm, self.height_cm
        )
    }
}

pub(crate) fn ensure_positive(axis: Axis, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension {
            axis: axis.name(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(Dimensions::new(10.0, 0.0, 5.0).is_err());
        assert!(Dimensions::new(-1.0, 10.0, 5.0).is_err());
        assert!(Dimensions::new(f64::NAN, 10.0, 5.0).is_err());
        assert!(Dimensions::new(f64::INFINITY, 10.0, 5.0).is_err());
        assert!(Dimensions::new(10.0, 10.0, 5.0).is_ok());
    }

    #[test]
    fn test_invalid_axis_is_reported() {
        match Dimensions::new(10.0, 10.0, -2.0) {
            Err(Error::InvalidDimension { axis, value }) => {
                assert_eq!(axis, "height");
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_from_unit_inches() {
        let dims = Dimensions::from_unit(18.0, 14.0, 8.0, Unit::Inches).unwrap();
        assert_eq!(dims, Dimensions::new(45.72, 35.56, 20.32).unwrap());
        assert_eq!(dims.to_inches(), (18.0, 14.0, 8.0));
    }

    #[test]
    fn test_from_unit_rejects_values_that_round_to_zero() {
        assert!(Dimensions::from_unit(0.001, 14.0, 8.0, Unit::Inches).is_err());
    }

    #[test]
    fn test_from_optional_requires_all_axes() {
        assert!(Dimensions::from_optional(Some(1.0), Some(2.0), None).is_none());
        let dims = Dimensions::from_optional(Some(1.0), Some(2.0), Some(3.0)).unwrap();
        assert_eq!(dims.get(Axis::Width), 2.0);
    }

    #[test]
    fn test_axis_order() {
        let names: Vec<_> = Axis::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["length", "width", "height"]);
    }
}
