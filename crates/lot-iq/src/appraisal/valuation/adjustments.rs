use chrono::{Datelike, NaiveDate};

use super::mileage;
use crate::appraisal::domain::{AdjustmentEntry, AppraisalInput, BodyType};
use crate::appraisal::tables::{
    accident_deduction_rate, province_multiplier, seasonal_base_factor, title_deduction_rate,
};

const WESTERN_HISTORY_PREMIUM: f64 = 0.075;
const CONDITION_STEP_RATE: f64 = 0.03;
const EXTRA_OWNER_RATE: f64 = 0.025;
const RENTAL_RATE: f64 = 0.075;
const TAXI_RATE: f64 = 0.20;
const MISSING_RECORDS_RATE: f64 = 0.075;

/// Builds the itemized ledger in presentation order. Every delta is computed
/// against the same base value, and steps that net to zero leave no entry.
pub(crate) fn build_ledger(
    input: &AppraisalInput,
    base_value: f64,
    as_of: NaiveDate,
) -> Vec<AdjustmentEntry> {
    let mut entries = Vec::new();
    let vehicle = &input.vehicle;
    let history = &input.history;

    let mileage_delta = mileage::mileage_delta(vehicle, base_value, as_of);
    if mileage_delta != 0.0 {
        let variance = vehicle.kilometers - mileage::expected_kilometers(vehicle, as_of);
        let rounded = variance.abs().round() as i64;
        let label = if variance < 0.0 {
            format!("Mileage {rounded} km below expected")
        } else {
            format!("Mileage {rounded} km above expected")
        };
        entries.push(AdjustmentEntry::from_delta(label, mileage_delta));
    }

    if let Some(province) = vehicle.province {
        let multiplier = province_multiplier(province);
        let delta = base_value * (multiplier - 1.0);
        if delta != 0.0 {
            entries.push(AdjustmentEntry::from_delta(
                format!("Regional market ({})", province.code()),
                delta,
            ));
        }
    }

    let eastern_buyer = vehicle.province.is_some_and(|p| p.is_eastern());
    if history.bc_alberta_history && eastern_buyer {
        entries.push(AdjustmentEntry::from_delta(
            "BC/Alberta history premium".to_string(),
            base_value * WESTERN_HISTORY_PREMIUM,
        ));
    }

    let seasonal = seasonal_factor(vehicle.body_type, as_of.month());
    let seasonal_delta = base_value * (seasonal - 1.0);
    if seasonal_delta.abs() > f64::EPSILON {
        entries.push(AdjustmentEntry::from_delta(
            format!("Seasonal demand ({})", as_of.format("%B")),
            seasonal_delta,
        ));
    }

    let title_rate = title_deduction_rate(history.title_type);
    if title_rate > 0.0 {
        entries.push(AdjustmentEntry::from_delta(
            format!("{} title deduction", history.title_type.label()),
            -base_value * title_rate,
        ));
    }

    let accident_rate = accident_deduction_rate(history.accident_level);
    if accident_rate > 0.0 {
        entries.push(AdjustmentEntry::from_delta(
            format!("{} accident deduction", history.accident_level.label()),
            -base_value * accident_rate,
        ));
    }

    let grade = input.condition.grade;
    let grade_steps = 5 - i32::from(grade.value());
    if grade_steps > 0 {
        entries.push(AdjustmentEntry::from_delta(
            format!("Condition grade {} ({})", grade.value(), grade.label()),
            -base_value * CONDITION_STEP_RATE * f64::from(grade_steps),
        ));
    }

    if history.owner_count > 2 {
        let extra = f64::from(history.owner_count - 2);
        entries.push(AdjustmentEntry::from_delta(
            format!("{} previous owners", history.owner_count),
            -base_value * EXTRA_OWNER_RATE * extra,
        ));
    }

    if history.previous_rental {
        entries.push(AdjustmentEntry::from_delta(
            "Previous rental usage".to_string(),
            -base_value * RENTAL_RATE,
        ));
    }
    if history.previous_taxi {
        entries.push(AdjustmentEntry::from_delta(
            "Previous taxi or rideshare usage".to_string(),
            -base_value * TAXI_RATE,
        ));
    }
    if history.missing_service_records {
        entries.push(AdjustmentEntry::from_delta(
            "Missing service records".to_string(),
            -base_value * MISSING_RECORDS_RATE,
        ));
    }

    entries
}

/// Net seasonal multiplier for the month, body-style tweaks folded in.
fn seasonal_factor(body_type: Option<BodyType>, month: u32) -> f64 {
    let mut factor = seasonal_base_factor(month);
    let winter = matches!(month, 10..=12 | 1..=3);

    match body_type {
        Some(body) if body.is_winter_favored() => {
            factor *= if winter { 1.05 } else { 0.95 };
            if body == BodyType::Truck && winter {
                factor *= 1.03;
            }
        }
        Some(BodyType::Convertible) => {
            if matches!(month, 5..=8) {
                factor *= 1.10;
            } else if matches!(month, 11 | 12 | 1 | 2) {
                factor *= 0.88;
            }
        }
        _ => {}
    }

    factor
}
