//! Built-in airline dataset
//!
//! Personal-item envelopes as published by each carrier, converted from
//! inches. Delta's figures are a conservative estimate.

use seatcheck_domain::model::NewAirline;
use seatcheck_types::VerificationStatus;

struct AirlineSeed {
    name: &'static str,
    iata_code: &'static str,
    /// Length, width, height in cm
    max_cm: (f64, f64, f64),
    status: VerificationStatus,
    source_url: &'static str,
    conflict_notes: Option<&'static str>,
}

const SEEDS: &[AirlineSeed] = &[
    AirlineSeed {
        name: "American Airlines",
        iata_code: "AA",
        max_cm: (45.72, 35.56, 20.32), // 18 x 14 x 8 in
        status: VerificationStatus::VerifiedOfficial,
        source_url: "https://www.aa.com/i18n/travel-info/baggage/carry-on-baggage.jsp",
        conflict_notes: None,
    },
    AirlineSeed {
        name: "United Airlines",
        iata_code: "UA",
        max_cm: (43.18, 25.40, 22.86), // 17 x 10 x 9 in
        status: VerificationStatus::VerifiedOfficial,
        source_url: "https://www.united.com/ual/en/us/fly/travel/baggage/carry-on.html",
        conflict_notes: None,
    },
    AirlineSeed {
        name: "Southwest Airlines",
        iata_code: "WN",
        max_cm: (46.99, 34.29, 21.59), // 18.5 x 13.5 x 8.5 in
        status: VerificationStatus::VerifiedOfficial,
        source_url: "https://www.southwest.com/help/baggage/carryon-bags",
        conflict_notes: None,
    },
    AirlineSeed {
        name: "Delta Air Lines",
        iata_code: "DL",
        max_cm: (40.64, 30.48, 15.24), // 16 x 12 x 6 in
        status: VerificationStatus::UnverifiedConservative,
        source_url: "https://www.delta.com/us/en/baggage/carry-on-baggage",
        conflict_notes: Some(
            "Conservative estimate based on various sources. Please verify with airline.",
        ),
    },
    AirlineSeed {
        name: "JetBlue Airways",
        iata_code: "B6",
        max_cm: (43.18, 33.02, 20.32), // 17 x 13 x 8 in
        status: VerificationStatus::VerifiedOfficial,
        source_url: "https://www.jetblue.com/travel/baggage",
        conflict_notes: None,
    },
    AirlineSeed {
        name: "Frontier Airlines",
        iata_code: "F9",
        max_cm: (45.72, 35.56, 20.32), // 18 x 14 x 8 in
        status: VerificationStatus::VerifiedOfficial,
        source_url: "https://www.flyfrontier.com/travel/baggage/",
        conflict_notes: None,
    },
];

/// The built-in airlines; pet carriers use the personal-item envelope
pub fn default_airlines() -> Vec<NewAirline> {
    SEEDS
        .iter()
        .map(|seed| {
            let (length, width, height) = seed.max_cm;
            let mut airline = NewAirline::new(seed.name, seed.iata_code);
            airline.max_personal_item_length_cm = Some(length);
            airline.max_personal_item_width_cm = Some(width);
            airline.max_personal_item_height_cm = Some(height);
            airline.pet_carrier_max_length_cm = Some(length);
            airline.pet_carrier_max_width_cm = Some(width);
            airline.pet_carrier_max_height_cm = Some(height);
            airline.verification_status = seed.status;
            airline.source_url = Some(seed.source_url.to_string());
            airline.conflict_notes = seed.conflict_notes.map(str::to_string);
            airline
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_airlines_are_valid() {
        let airlines = default_airlines();
        assert_eq!(airlines.len(), 6);
        for airline in &airlines {
            airline.validate().unwrap();
            assert!(airline.pet_carrier_allowed);
        }
    }

    #[test]
    fn test_delta_is_conservative() {
        let delta = default_airlines()
            .into_iter()
            .find(|a| a.iata_code == "DL")
            .unwrap();
        assert_eq!(delta.verification_status, VerificationStatus::UnverifiedConservative);
        assert!(delta.conflict_notes.is_some());
    }
}
