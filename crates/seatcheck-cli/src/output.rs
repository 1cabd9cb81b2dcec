//! Output formatting module

use serde::Serialize;

use seatcheck_app::app::BagCheckOutcome;
use seatcheck_domain::model::{Airline, Bag, BagCheckRecord, Dimensions};
use seatcheck_types::{OutputFormat, Result, Unit};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_dims(dims: Option<Dimensions>, unit: Unit) -> String {
    match dims {
        Some(d) => match unit {
            Unit::Centimeters => format!("{:.2} x {:.2} x {:.2} cm", d.length_cm, d.width_cm, d.height_cm),
            Unit::Inches => {
                let (l, w, h) = d.to_inches();
                format!("{:.2} x {:.2} x {:.2} in", l, w, h)
            }
        },
        None => "-".to_string(),
    }
}

pub fn print_check(format: OutputFormat, outcome: &BagCheckOutcome, unit: Unit) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(outcome);
    }

    let airline = &outcome.airline;
    println!("\nBag Check");
    println!("=========");
    println!("Airline:      {} ({})", airline.name, airline.iata_code);
    println!("Data:         {}", airline.verification_status.label());
    println!("Bag:          {}", format_dims(Some(outcome.dimensions), unit));
    let limit = if outcome.is_pet_carrier {
        airline.pet_carrier_envelope()
    } else {
        airline.personal_item_envelope()
    };
    println!(
        "Limit:        {}{}",
        format_dims(limit, unit),
        if outcome.is_pet_carrier { " (pet carrier)" } else { "" }
    );

    if outcome.fits() {
        println!("\nResult:       Fits under the seat");
    } else {
        println!("\nResult:       Does not fit");
        println!("Exceeds in:   {}", outcome.exceeds_in().join(", "));
    }

    if let Some(ref notes) = airline.conflict_notes {
        println!("\nNote: {}", notes);
    }
    if let Some(ref id) = outcome.bag_check_id {
        println!("Recorded as {}", id);
    }

    Ok(())
}

pub fn print_airlines(format: OutputFormat, airlines: &[Airline]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(airlines);
    }

    println!(
        "{:<4} {:<22} {:<26} {:<30} {:<8} {}",
        "Code", "Airline", "Personal item (in)", "Personal item (cm)", "Pets", "Status"
    );
    println!("{}", "-".repeat(104));
    for airline in airlines {
        let envelope = airline.personal_item_envelope();
        println!(
            "{:<4} {:<22} {:<26} {:<30} {:<8} {}",
            airline.iata_code,
            airline.name,
            format_dims(envelope, Unit::Inches),
            format_dims(envelope, Unit::Centimeters),
            if airline.pet_carrier_allowed { "Yes" } else { "No" },
            airline.verification_status.label(),
        );
    }
    Ok(())
}

pub fn print_airline(format: OutputFormat, airline: &Airline) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(airline);
    }

    println!("\n{} ({})", airline.name, airline.iata_code);
    println!("{}", "=".repeat(airline.name.len() + airline.iata_code.len() + 3));
    let personal = airline.personal_item_envelope();
    println!("Personal item:   {}", format_dims(personal, Unit::Inches));
    println!("                 {}", format_dims(personal, Unit::Centimeters));
    if airline.pet_carrier_allowed {
        let pet = airline.pet_carrier_envelope();
        println!("Pet carrier:     {}", format_dims(pet, Unit::Inches));
        println!("                 {}", format_dims(pet, Unit::Centimeters));
    } else {
        println!("Pet carrier:     not allowed");
    }
    println!("Status:          {}", airline.verification_status.label());
    if let Some(ref url) = airline.source_url {
        println!("Source:          {}", url);
    }
    if let Some(date) = airline.last_verified_date {
        println!("Last verified:   {}", date.format("%Y-%m-%d"));
    }
    if let Some(ref notes) = airline.conflict_notes {
        println!("Notes:           {}", notes);
    }
    Ok(())
}

pub fn print_bags(format: OutputFormat, bags: &[Bag]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(bags);
    }

    if bags.is_empty() {
        println!("No bags in the catalogue");
        return Ok(());
    }
    for bag in bags {
        println!(
            "{:<36}  {:<40} {:<28}{}",
            bag.id,
            bag.display_name(),
            format_dims(Some(bag.dimensions), Unit::Centimeters),
            if bag.is_pet_carrier { " pet carrier" } else { "" }
        );
    }
    Ok(())
}

pub fn print_history(format: OutputFormat, records: &[BagCheckRecord]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(records);
    }

    if records.is_empty() {
        println!("No bag checks recorded");
        return Ok(());
    }
    for record in records {
        let check = &record.check;
        println!(
            "{}  {:<3} {:<28} {}{}",
            check.created_at.format("%Y-%m-%d %H:%M"),
            record.airline.iata_code,
            format_dims(Some(check.dimensions), Unit::Centimeters),
            if check.fits_under_seat { "fits" } else { "does not fit" },
            if check.is_pet_carrier { " (pet carrier)" } else { "" }
        );
    }
    Ok(())
}
