use chrono::NaiveDate;

use crate::appraisal::domain::VehicleFacts;
use crate::appraisal::tables::{
    brand_multiplier, depreciation_band, DEFAULT_MSRP, DEFAULT_VEHICLE_AGE,
};

/// Flat annual decay applied once the body-type curve runs out at year five.
const LATE_LIFE_DECAY: f64 = 0.10;

/// Books a base value from MSRP when no comparable sales are available.
/// Year one takes the steep body-type hit, years two through five the
/// body-type annual fraction, and everything past five a flat 10 % per year.
pub(crate) fn estimate_base_value(vehicle: &VehicleFacts, as_of: NaiveDate) -> f64 {
    let msrp = vehicle.msrp.unwrap_or(DEFAULT_MSRP);
    let age = vehicle.age_years(as_of).unwrap_or(DEFAULT_VEHICLE_AGE);
    let band = depreciation_band(vehicle.body_type);

    let mut value = msrp;
    if age >= 1 {
        value *= 1.0 - band.first_year;
    }
    for _ in 2..=age.min(5) {
        value *= 1.0 - band.later_years;
    }
    for _ in 5..age {
        value *= 1.0 - LATE_LIFE_DECAY;
    }

    value *= brand_multiplier(&vehicle.make);
    value.max(0.0)
}
