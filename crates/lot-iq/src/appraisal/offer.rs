use chrono::NaiveDate;

use super::domain::AppraisalInput;
use super::settings::BusinessSettings;
use super::tables::{recondition_band, repair_cost_band, rust_cost_band, DEFAULT_VEHICLE_AGE};

/// Fraction of retail a wholesale buyer pays at auction.
const WHOLESALE_RATIO: f64 = 0.82;
const OFFER_BAND_LOW: f64 = 0.92;
const OFFER_BAND_HIGH: f64 = 1.08;
const HIGH_RISK_KM: f64 = 100_000.0;
const HIGH_RISK_AGE: i32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OfferBreakdown {
    pub(crate) wholesale_value: f64,
    pub(crate) reconditioning_cost: f64,
    pub(crate) profit_margin: f64,
    pub(crate) holding_cost: f64,
    pub(crate) trade_in_offer: f64,
    pub(crate) trade_in_low: f64,
    pub(crate) trade_in_high: f64,
}

/// Works the retail value back to a trade-in offer: wholesale recovery minus
/// reconditioning, profit target, and holding cost, floored at zero.
pub(crate) fn compute(
    retail_value: f64,
    input: &AppraisalInput,
    settings: &BusinessSettings,
    as_of: NaiveDate,
) -> OfferBreakdown {
    let wholesale_value = retail_value * WHOLESALE_RATIO;

    let reconditioning_cost = settings
        .reconditioning_override
        .unwrap_or_else(|| estimate_reconditioning(input, settings, as_of));

    let profit_margin = settings
        .profit_margin_override
        .unwrap_or(retail_value * settings.profit_margin_rate);

    let holding_cost = settings.holding_cost_per_day * f64::from(settings.holding_days);

    let trade_in_offer =
        (wholesale_value - reconditioning_cost - profit_margin - holding_cost).max(0.0);

    OfferBreakdown {
        wholesale_value,
        reconditioning_cost,
        profit_margin,
        holding_cost,
        trade_in_offer,
        trade_in_low: trade_in_offer * OFFER_BAND_LOW,
        trade_in_high: trade_in_offer * OFFER_BAND_HIGH,
    }
}

/// Grade band midpoint plus flagged repairs plus rust remediation, padded by
/// the safety buffer. A desk override skips the estimate and the buffer both.
fn estimate_reconditioning(
    input: &AppraisalInput,
    settings: &BusinessSettings,
    as_of: NaiveDate,
) -> f64 {
    let condition = &input.condition;

    let mut estimate = recondition_band(condition.grade).midpoint();
    for repair in &condition.repairs {
        estimate += repair_cost_band(*repair).midpoint();
    }
    estimate += rust_cost_band(condition.rust).midpoint();

    let age = input
        .vehicle
        .age_years(as_of)
        .unwrap_or(DEFAULT_VEHICLE_AGE);
    let buffer = if input.vehicle.kilometers > HIGH_RISK_KM || age > HIGH_RISK_AGE {
        settings.elevated_buffer_rate
    } else {
        settings.safety_buffer_rate
    };

    estimate * (1.0 + buffer)
}
