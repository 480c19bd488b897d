//! Integration specifications for the inventory CSV import feeding the
//! appraisal pipeline with comparable listings.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use lot_iq::appraisal::domain::{AppraisalSubmission, BaseValueSource, ComparableCar, VehicleInput};
use lot_iq::appraisal::repository::{InventoryError, InventoryStore};
use lot_iq::appraisal::{AppraisalService, BusinessSettings};
use lot_iq::inventory::{InventoryCsvImporter, InventoryImportError};

struct ImportedInventory {
    cars: Mutex<Vec<ComparableCar>>,
}

impl ImportedInventory {
    fn new(cars: Vec<ComparableCar>) -> Self {
        Self {
            cars: Mutex::new(cars),
        }
    }
}

impl InventoryStore for ImportedInventory {
    fn comparables(&self) -> Result<Vec<ComparableCar>, InventoryError> {
        Ok(self.cars.lock().expect("lock").clone())
    }
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

#[test]
fn importer_reads_a_dealer_export() {
    let csv = "Make,Model,Year,Trim,Price,Kilometers\n\
Toyota,Camry,2020,LE,\"$21,500\",\"52,300\"\n\
Toyota,Camry,2021,SE,\"$22,900\",41000\n\
Toyota,Corolla,2020,LE,\"$18,400\",45000\n";

    let listings = InventoryCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].make, "Toyota");
    assert_eq!(listings[0].trim, "LE");
    assert_eq!(listings[0].parsed_price(), Some(21_500.0));
    assert_eq!(listings[0].parsed_kilometers(), Some(52_300.0));
}

#[test]
fn importer_skips_rows_without_an_identity() {
    let csv = "Make,Model,Year,Trim,Price,Kilometers\n\
Toyota,Camry,2020,LE,21500,52300\n\
Toyota,,2020,,15000,60000\n\
,Accord,2021,Sport,27800,35600\n";

    let listings = InventoryCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].model, "Camry");
}

#[test]
fn imported_listings_price_an_appraisal() {
    let csv = "Make,Model,Year,Trim,Price,Kilometers\n\
Toyota,Camry,2020,LE,\"$21,500\",52300\n\
Toyota,Camry,2021,SE,\"$22,900\",41000\n\
Toyota,Corolla,2020,LE,\"$18,400\",45000\n";

    let listings = InventoryCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");
    let service = AppraisalService::new(
        Arc::new(ImportedInventory::new(listings)),
        BusinessSettings::default(),
    );

    let submission = AppraisalSubmission {
        vehicle: VehicleInput {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            kilometers: "60000".to_string(),
            province: "ON".to_string(),
            ..VehicleInput::default()
        },
        ..AppraisalSubmission::default()
    };

    let result = service
        .appraise(submission, as_of())
        .expect("appraisal succeeds");

    assert_eq!(result.base_value_source, BaseValueSource::ComparableSales);
    let expected = (21_500.0_f64 + 22_900.0) / 2.0;
    assert!(
        (result.base_value - expected).abs() < 1e-6,
        "expected {expected}, got {}",
        result.base_value
    );
    assert_eq!(result.similar_cars.len(), 2);
}

#[test]
fn importer_handles_a_full_lot_export() {
    let data = include_bytes!("../sample_inventory.csv");

    let listings = InventoryCsvImporter::from_reader(&data[..]).expect("lot export imports");

    assert_eq!(listings.len(), 13);
    assert!(listings
        .iter()
        .all(|car| !car.make.is_empty() && !car.model.is_empty()));

    let unpriced = listings
        .iter()
        .find(|car| car.model == "Fusion")
        .expect("fusion listed");
    assert_eq!(unpriced.parsed_price(), None);
    assert_eq!(unpriced.price, "Call for price");
}

#[test]
fn missing_exports_surface_as_io_errors() {
    match InventoryCsvImporter::from_path("no-such-lot-export.csv") {
        Err(InventoryImportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
