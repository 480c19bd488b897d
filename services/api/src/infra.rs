use chrono::NaiveDate;
use lot_iq::appraisal::domain::ComparableCar;
use lot_iq::appraisal::repository::{InventoryError, InventoryStore};
use lot_iq::appraisal::vin::{normalize_vin, DecodedVin, VinDecodeError, VinDecoder};
use lot_iq::appraisal::BusinessSettings;
use lot_iq::config::ValuationConfig;
use lot_iq::error::AppError;
use lot_iq::inventory::InventoryCsvImporter;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryInventoryStore {
    cars: Arc<Mutex<Vec<ComparableCar>>>,
}

impl InMemoryInventoryStore {
    pub(crate) fn with_cars(cars: Vec<ComparableCar>) -> Self {
        Self {
            cars: Arc::new(Mutex::new(cars)),
        }
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn comparables(&self) -> Result<Vec<ComparableCar>, InventoryError> {
        let guard = self
            .cars
            .lock()
            .map_err(|_| InventoryError::Unavailable("inventory mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

/// VIN lookups served from a canned table until the external decode
/// provider is wired up.
pub(crate) struct FixtureVinDecoder {
    decodes: HashMap<&'static str, DecodedVin>,
}

impl Default for FixtureVinDecoder {
    fn default() -> Self {
        let mut decodes = HashMap::new();
        decodes.insert(
            "4T1G11AK5LU912345",
            decoded("Toyota", "Camry", "2020", "LE", "2.5L I4", "Automatic", "Sedan"),
        );
        decodes.insert(
            "2HGFC2F59LH510662",
            decoded("Honda", "Civic", "2020", "LX", "2.0L I4", "CVT", "Sedan"),
        );
        decodes.insert(
            "1FTEW1EP4LFA90331",
            decoded("Ford", "F-150", "2020", "XLT", "2.7L V6", "Automatic", "Truck"),
        );
        decodes.insert(
            "JM3KFBDM1L0744219",
            decoded("Mazda", "CX-5", "2020", "GS", "2.5L I4", "Automatic", "SUV"),
        );
        Self { decodes }
    }
}

fn decoded(
    make: &str,
    model: &str,
    year: &str,
    trim: &str,
    engine: &str,
    transmission: &str,
    body_class: &str,
) -> DecodedVin {
    DecodedVin {
        make: make.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        trim: trim.to_string(),
        engine: engine.to_string(),
        transmission: transmission.to_string(),
        fuel_type: "Gasoline".to_string(),
        drive_type: "FWD".to_string(),
        body_class: body_class.to_string(),
    }
}

impl VinDecoder for FixtureVinDecoder {
    fn decode(&self, vin: &str) -> Result<DecodedVin, VinDecodeError> {
        let normalized = normalize_vin(vin)?;
        self.decodes
            .get(normalized.as_str())
            .cloned()
            .ok_or(VinDecodeError::NotFound(normalized))
    }
}

pub(crate) fn default_business_settings(config: &ValuationConfig) -> BusinessSettings {
    BusinessSettings {
        profit_margin_rate: config.profit_margin_rate,
        holding_cost_per_day: config.holding_cost_per_day,
        holding_days: config.holding_days,
        ..BusinessSettings::default()
    }
}

/// Listings served when no CSV export is supplied, mirroring a small lot.
pub(crate) fn seeded_inventory() -> Vec<ComparableCar> {
    [
        ("Toyota", "Camry", "2020", "LE", "21500", "52300"),
        ("Toyota", "Camry", "2021", "SE", "22900", "41250"),
        ("Toyota", "Camry", "2019", "LE", "19800", "68400"),
        ("Toyota", "Corolla", "2018", "LE", "15900", "88000"),
        ("Toyota", "Highlander", "2020", "XLE", "36400", "61200"),
        ("Honda", "Civic", "2020", "LX", "20400", "47900"),
        ("Honda", "Accord", "2021", "Sport", "27800", "35600"),
        ("Honda", "Pilot", "2020", "EX-L", "37900", "58300"),
        ("Ford", "F-150", "2020", "XLT", "38500", "72100"),
        ("Mazda", "CX-5", "2020", "GS", "28300", "43700"),
        ("Nissan", "Altima", "2020", "SV", "21700", "55800"),
        ("Volkswagen", "Jetta", "2019", "Comfortline", "17600", "74500"),
    ]
    .into_iter()
    .map(|(make, model, year, trim, price, kilometers)| ComparableCar {
        make: make.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        trim: trim.to_string(),
        price: price.to_string(),
        kilometers: kilometers.to_string(),
    })
    .collect()
}

pub(crate) fn load_inventory(csv: Option<PathBuf>) -> Result<Vec<ComparableCar>, AppError> {
    match csv {
        Some(path) => InventoryCsvImporter::from_path(path).map_err(AppError::from),
        None => Ok(seeded_inventory()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
