//! CSV loader for reference bags
//!
//! Expected header row:
//! `brand,model,length,width,height[,pet_carrier][,carrier_type]`
//! Dimensions are read in the unit given by the caller.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use seatcheck_domain::model::{Dimensions, NewBag};
use seatcheck_types::{CarrierType, Error, Result, Unit};

#[derive(Debug, Deserialize)]
struct BagRow {
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    model: Option<String>,
    length: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    pet_carrier: Option<bool>,
    #[serde(default)]
    carrier_type: Option<String>,
}

/// Load bags from a CSV file
pub fn load_bags_from_csv(path: &Path, unit: Unit, verified: bool) -> Result<Vec<NewBag>> {
    let file = std::fs::File::open(path)?;
    load_bags_from_reader(file, unit, verified)
}

/// Load bags from any CSV source
pub fn load_bags_from_reader<R: Read>(reader: R, unit: Unit, verified: bool) -> Result<Vec<NewBag>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut bags = Vec::new();
    for (index, row) in csv_reader.deserialize::<BagRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = row?;
        bags.push(row_to_bag(row, unit, verified).map_err(|e| {
            Error::InvalidInput(format!("line {}: {}", line, e))
        })?);
    }
    Ok(bags)
}

fn row_to_bag(row: BagRow, unit: Unit, verified: bool) -> Result<NewBag> {
    let dimensions = Dimensions::from_unit(row.length, row.width, row.height, unit)?;
    let carrier_type = row
        .carrier_type
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<CarrierType>)
        .transpose()?;

    let mut bag = NewBag::new(dimensions);
    bag.brand = row.brand.filter(|s| !s.is_empty());
    bag.model = row.model.filter(|s| !s.is_empty());
    // A carrier type implies a pet carrier unless stated otherwise
    bag.is_pet_carrier = row.pet_carrier.unwrap_or(carrier_type.is_some());
    bag.carrier_type = carrier_type;
    bag.is_verified = verified;
    Ok(bag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inches() {
        let csv = "brand,model,length,width,height\nAway,The Everywhere Bag,18,14,8\n";
        let bags = load_bags_from_reader(csv.as_bytes(), Unit::Inches, true).unwrap();
        assert_eq!(bags.len(), 1);
        assert_eq!(bags[0].dimensions, Dimensions::new(45.72, 35.56, 20.32).unwrap());
        assert!(bags[0].is_verified);
        assert!(!bags[0].is_pet_carrier);
    }

    #[test]
    fn test_optional_columns() {
        let csv = "\
brand,model,length,width,height,pet_carrier,carrier_type
Sherpa, Original Deluxe ,43.18,27.94,27.94,,soft-sided
,,40,30,20,false,
";
        let bags = load_bags_from_reader(csv.as_bytes(), Unit::Centimeters, false).unwrap();
        assert_eq!(bags.len(), 2);
        assert_eq!(bags[0].model.as_deref(), Some("Original Deluxe"));
        assert!(bags[0].is_pet_carrier);
        assert_eq!(bags[0].carrier_type, Some(CarrierType::SoftSided));
        assert!(bags[1].brand.is_none());
        assert!(!bags[1].is_pet_carrier);
    }

    #[test]
    fn test_invalid_row_reports_line() {
        let csv = "brand,model,length,width,height\nA,B,10,10,10\nC,D,10,-4,10\n";
        let err = load_bags_from_reader(csv.as_bytes(), Unit::Centimeters, false).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);
    }

    #[test]
    fn test_non_numeric_dimension() {
        let csv = "brand,model,length,width,height\nA,B,ten,10,10\n";
        assert!(matches!(
            load_bags_from_reader(csv.as_bytes(), Unit::Centimeters, false),
            Err(Error::Csv(_))
        ));
    }
}
