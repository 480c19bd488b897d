use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::appraisal::domain::{
    AppraisalInput, AppraisalSubmission, ComparableCar, ConditionInput, HistoryInput, TitleType,
    VehicleInput,
};
use crate::appraisal::engine::AppraisalEngine;
use crate::appraisal::intake::IntakeGuard;
use crate::appraisal::repository::{InventoryError, InventoryStore};
use crate::appraisal::settings::BusinessSettings;
use crate::appraisal::{appraisal_router, AppraisalService};

/// Valuation date shared across the suite so seasonal and age math stays
/// stable: mid June 2025.
pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn business_settings() -> BusinessSettings {
    BusinessSettings {
        profit_margin_rate: 0.15,
        holding_cost_per_day: 50.0,
        holding_days: 10,
        safety_buffer_rate: 0.10,
        elevated_buffer_rate: 0.15,
        profit_margin_override: None,
        reconditioning_override: None,
    }
}

pub(super) fn camry(year: &str, trim: &str, price: &str, kilometers: &str) -> ComparableCar {
    ComparableCar {
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: year.to_string(),
        trim: trim.to_string(),
        price: price.to_string(),
        kilometers: kilometers.to_string(),
    }
}

/// Two clean Camry comparables averaging 22 000, plus rows the matcher must
/// ignore: wrong model, out-of-window year, unparseable price.
pub(super) fn inventory() -> Vec<ComparableCar> {
    vec![
        camry("2020", "LE", "20000", "50000"),
        camry("2022", "LE", "24000", "30000"),
        camry("2016", "LE", "15000", "140000"),
        camry("2021", "XLE", "sold", "45000"),
        ComparableCar {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: "2020".to_string(),
            trim: "LE".to_string(),
            price: "18000".to_string(),
            kilometers: "60000".to_string(),
        },
    ]
}

pub(super) fn submission() -> AppraisalSubmission {
    AppraisalSubmission {
        vehicle: VehicleInput {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            trim: String::new(),
            kilometers: "60000".to_string(),
            body_type: String::new(),
            province: "ON".to_string(),
            msrp: String::new(),
            engine: String::new(),
            transmission: String::new(),
        },
        condition: ConditionInput {
            naaa_grade: 4,
            ..ConditionInput::default()
        },
        history: HistoryInput::default(),
        settings: Default::default(),
    }
}

pub(super) fn salvage_submission() -> AppraisalSubmission {
    let mut submission = submission();
    submission.history.title_type = TitleType::Salvage;
    submission
}

pub(super) fn engine() -> AppraisalEngine {
    AppraisalEngine::new(business_settings())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard
}

pub(super) fn input_from(submission: AppraisalSubmission) -> AppraisalInput {
    guard()
        .facts_from_submission(submission, as_of())
        .expect("valid submission")
}

pub(super) fn build_service() -> (AppraisalService<MemoryInventory>, Arc<MemoryInventory>) {
    let store = Arc::new(MemoryInventory::with_cars(inventory()));
    let service = AppraisalService::new(store.clone(), business_settings());
    (service, store)
}

pub(super) fn appraisal_router_with_service(
    service: AppraisalService<MemoryInventory>,
) -> axum::Router {
    appraisal_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryInventory {
    pub(super) cars: Arc<Mutex<Vec<ComparableCar>>>,
}

impl MemoryInventory {
    pub(super) fn with_cars(cars: Vec<ComparableCar>) -> Self {
        Self {
            cars: Arc::new(Mutex::new(cars)),
        }
    }

    pub(super) fn replace_all(&self, cars: Vec<ComparableCar>) {
        *self.cars.lock().expect("inventory mutex poisoned") = cars;
    }
}

impl InventoryStore for MemoryInventory {
    fn comparables(&self) -> Result<Vec<ComparableCar>, InventoryError> {
        Ok(self.cars.lock().expect("inventory mutex poisoned").clone())
    }
}

pub(super) struct UnavailableInventory;

impl InventoryStore for UnavailableInventory {
    fn comparables(&self) -> Result<Vec<ComparableCar>, InventoryError> {
        Err(InventoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
