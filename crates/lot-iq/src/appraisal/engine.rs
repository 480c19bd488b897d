use chrono::NaiveDate;

use super::decision;
use super::domain::{AppraisalInput, AppraisalResult, ComparableCar};
use super::offer;
use super::settings::{BusinessSettings, SettingsOverride};
use super::valuation;

/// Retail asking spread shown alongside the point estimate.
const RETAIL_BAND_LOW: f64 = 0.95;
const RETAIL_BAND_HIGH: f64 = 1.05;

/// Stateless appraiser that prices validated facts against an inventory
/// snapshot. The same input, inventory, and as-of date always produce the
/// same result.
pub struct AppraisalEngine {
    settings: BusinessSettings,
}

impl AppraisalEngine {
    pub fn new(settings: BusinessSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BusinessSettings {
        &self.settings
    }

    pub fn appraise(
        &self,
        input: &AppraisalInput,
        inventory: &[ComparableCar],
        as_of: NaiveDate,
    ) -> AppraisalResult {
        self.appraise_with(input, inventory, as_of, &SettingsOverride::default())
    }

    /// Appraises with per-request desk overrides layered over the engine's
    /// configured economics.
    pub fn appraise_with(
        &self,
        input: &AppraisalInput,
        inventory: &[ComparableCar],
        as_of: NaiveDate,
        overrides: &SettingsOverride,
    ) -> AppraisalResult {
        let settings = self.settings.with_overrides(overrides);

        let valuation = valuation::value_vehicle(input, inventory, as_of);
        let outcome = decision::evaluate(input, as_of);
        let offer = offer::compute(valuation.retail_value, input, &settings, as_of);

        AppraisalResult {
            decision: outcome.decision,
            reasons: outcome.reasons,
            base_value: valuation.base_value,
            base_value_source: valuation.source,
            retail_value: valuation.retail_value,
            retail_low: valuation.retail_value * RETAIL_BAND_LOW,
            retail_high: valuation.retail_value * RETAIL_BAND_HIGH,
            wholesale_value: offer.wholesale_value,
            trade_in_offer: offer.trade_in_offer,
            trade_in_low: offer.trade_in_low,
            trade_in_high: offer.trade_in_high,
            adjustments: valuation.adjustments,
            reconditioning_cost: offer.reconditioning_cost,
            profit_margin: offer.profit_margin,
            holding_cost: offer.holding_cost,
            similar_cars: valuation.similar_cars,
        }
    }
}
