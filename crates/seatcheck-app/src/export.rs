//! Excel export of bag check history

use std::path::Path;

use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use seatcheck_domain::model::BagCheckRecord;
use seatcheck_types::{Error, Result};

use crate::app::summarize;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export bag checks to an Excel file; `None` labels the export as all users
pub fn export_history_to_excel(
    user_id: Option<&str>,
    records: &[BagCheckRecord],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, user_id, records)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, records)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, user_id: Option<&str>, records: &[BagCheckRecord]) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let summary = summarize(records);

    sheet
        .write_string_with_format(0, 0, "Bag Check History", &header_format)
        .map_err(excel_err)?;

    sheet.write_string(2, 0, "User:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, user_id.unwrap_or("All users"))
        .map_err(excel_err)?;

    sheet.write_string(3, 0, "Exported At:").map_err(excel_err)?;
    sheet
        .write_string(3, 1, Utc::now().to_rfc3339())
        .map_err(excel_err)?;

    sheet.write_string(4, 0, "Total Checks:").map_err(excel_err)?;
    sheet
        .write_number(4, 1, summary.total as f64)
        .map_err(excel_err)?;

    sheet.write_string(5, 0, "Fits:").map_err(excel_err)?;
    sheet
        .write_number(5, 1, summary.fits as f64)
        .map_err(excel_err)?;

    sheet.write_string(6, 0, "Does Not Fit:").map_err(excel_err)?;
    sheet
        .write_number(6, 1, summary.does_not_fit as f64)
        .map_err(excel_err)?;

    // Per-airline breakdown
    sheet
        .write_string_with_format(8, 0, "Checks by Airline", &header_format)
        .map_err(excel_err)?;

    let mut row = 9;
    for (code, count) in &summary.by_airline {
        sheet.write_string(row, 0, code).map_err(excel_err)?;
        sheet
            .write_number(row, 1, *count as f64)
            .map_err(excel_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 20).map_err(excel_err)?;
    sheet.set_column_width(1, 36).map_err(excel_err)?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, records: &[BagCheckRecord]) -> Result<()> {
    sheet.set_name("Details").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Date",
        "Airline",
        "Flight",
        "Bag",
        "Length (cm)",
        "Width (cm)",
        "Height (cm)",
        "Pet Carrier",
        "Fits Under Seat",
        "User",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let check = &record.check;

        sheet
            .write_string(row, 0, check.created_at.format("%Y-%m-%d %H:%M").to_string())
            .map_err(excel_err)?;
        sheet
            .write_string(
                row,
                1,
                format!("{} ({})", record.airline.name, record.airline.iata_code),
            )
            .map_err(excel_err)?;

        if let Some(ref flight) = check.flight_number {
            sheet.write_string(row, 2, flight).map_err(excel_err)?;
        }
        if let Some(ref bag) = record.bag {
            sheet
                .write_string(row, 3, bag.display_name())
                .map_err(excel_err)?;
        }

        sheet
            .write_number(row, 4, check.dimensions.length_cm)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 5, check.dimensions.width_cm)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 6, check.dimensions.height_cm)
            .map_err(excel_err)?;

        sheet
            .write_string(row, 7, if check.is_pet_carrier { "Yes" } else { "No" })
            .map_err(excel_err)?;
        sheet
            .write_string(row, 8, if check.fits_under_seat { "Yes" } else { "No" })
            .map_err(excel_err)?;
        if let Some(ref user_id) = check.user_id {
            sheet.write_string(row, 9, user_id).map_err(excel_err)?;
        }
    }

    // Approximate auto-fit
    sheet.set_column_width(0, 18).map_err(excel_err)?;
    sheet.set_column_width(1, 28).map_err(excel_err)?;
    sheet.set_column_width(2, 10).map_err(excel_err)?;
    sheet.set_column_width(3, 30).map_err(excel_err)?;

    Ok(())
}
