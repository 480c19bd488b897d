//! CSV import for the lot inventory feed that backs comparable pricing.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::appraisal::ComparableCar;

#[derive(Debug)]
pub enum InventoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for InventoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryImportError::Io(err) => {
                write!(f, "failed to read inventory export: {}", err)
            }
            InventoryImportError::Csv(err) => write!(f, "invalid inventory CSV data: {}", err),
        }
    }
}

impl std::error::Error for InventoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryImportError::Io(err) => Some(err),
            InventoryImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for InventoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InventoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct InventoryCsvImporter;

impl InventoryCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ComparableCar>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses listings from a CSV export. Rows without both a make and a
    /// model are dropped; every other field passes through as typed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ComparableCar>, InventoryImportError> {
        let listings = parser::parse_records(reader)?
            .into_iter()
            .filter(|car| !car.make.trim().is_empty() && !car.model.trim().is_empty())
            .collect();
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_rows_in_order() {
        let csv = "make,model,year,trim,price,kilometers\n\
Toyota,Camry,2020,LE,21500,65000\n\
Honda,Civic,2019,Sport,19800,72000\n";
        let cars = InventoryCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].make, "Toyota");
        assert_eq!(cars[0].price, "21500");
        assert_eq!(cars[1].model, "Civic");
    }

    #[test]
    fn skips_rows_missing_make_or_model() {
        let csv = "make,model,year,trim,price,kilometers\n\
Toyota,Camry,2020,LE,21500,65000\n\
,Camry,2020,LE,21500,65000\n\
Toyota,,2020,LE,21500,65000\n";
        let cars = InventoryCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(cars.len(), 1);
    }

    #[test]
    fn tolerates_title_case_headers_and_extra_columns() {
        let csv = "Make,Model,Year,Trim,Price,Kilometers,Stock Number\n\
Mazda,CX-5,2021,GT,28900,41000,A-1042\n";
        let cars = InventoryCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].make, "Mazda");
        assert_eq!(cars[0].kilometers, "41000");
    }

    #[test]
    fn keeps_unparseable_prices_verbatim() {
        let csv = "make,model,year,trim,price,kilometers\n\
Ford,F-150,2018,XLT,call for price,120000\n";
        let cars = InventoryCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(cars[0].price, "call for price");
        assert!(cars[0].parsed_price().is_none());
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = InventoryCsvImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            InventoryImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
