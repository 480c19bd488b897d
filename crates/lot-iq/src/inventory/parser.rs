use std::io::Read;

use serde::Deserialize;

use crate::appraisal::ComparableCar;

/// One row of the lot management export. Values stay strings; pricing code
/// decides what parses.
#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(default)]
    make: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    trim: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    kilometers: String,
}

/// Reads every listing row. Headers are matched case-insensitively and a
/// UTF-8 BOM on the first header cell is ignored; unknown columns pass
/// through untouched.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ComparableCar>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let normalized: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|header| {
            header
                .trim_start_matches('\u{feff}')
                .trim()
                .to_ascii_lowercase()
        })
        .collect();
    csv_reader.set_headers(normalized);

    let mut records = Vec::new();
    for record in csv_reader.deserialize::<ListingRow>() {
        let row = record?;
        records.push(ComparableCar {
            make: row.make,
            model: row.model,
            year: row.year,
            trim: row.trim,
            price: row.price,
            kilometers: row.kilometers,
        });
    }

    Ok(records)
}
