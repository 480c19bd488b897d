use chrono::NaiveDate;

use crate::appraisal::domain::VehicleFacts;
use crate::appraisal::tables::DEFAULT_VEHICLE_AGE;

pub(crate) const EXPECTED_KM_PER_YEAR: f64 = 20_000.0;
const RATE_PER_KM: f64 = 0.02;
const MAX_CREDIT_SHARE: f64 = 0.10;
const MAX_PENALTY_SHARE: f64 = 0.15;

/// Expected lifetime odometer reading for the vehicle's age.
pub(crate) fn expected_kilometers(vehicle: &VehicleFacts, as_of: NaiveDate) -> f64 {
    let age = vehicle.age_years(as_of).unwrap_or(DEFAULT_VEHICLE_AGE);
    f64::from(age) * EXPECTED_KM_PER_YEAR
}

/// Dollar delta for odometer variance, two cents per kilometer, clamped so
/// mileage alone never moves the price more than +10 % / −15 % of base.
pub(crate) fn mileage_delta(vehicle: &VehicleFacts, base_value: f64, as_of: NaiveDate) -> f64 {
    let variance = vehicle.kilometers - expected_kilometers(vehicle, as_of);
    let raw = -variance * RATE_PER_KM;
    raw.clamp(-MAX_PENALTY_SHARE * base_value, MAX_CREDIT_SHARE * base_value)
}
