//! Base value selection and the adjustment ledger. Everything here is pure;
//! the clock arrives as an explicit as-of date.

mod adjustments;
mod comparables;
mod depreciation;
mod mileage;

pub(crate) use comparables::{find_comparables, preview_comparables};

use chrono::NaiveDate;

use super::domain::{
    AdjustmentEntry, AppraisalInput, BaseValueSource, ComparableCar, ComparableQuery,
};

/// Sample size surfaced alongside a result.
pub(crate) const SIMILAR_CAR_LIMIT: usize = 3;

pub(crate) struct ValuationBreakdown {
    pub(crate) base_value: f64,
    pub(crate) source: BaseValueSource,
    pub(crate) retail_value: f64,
    pub(crate) adjustments: Vec<AdjustmentEntry>,
    pub(crate) similar_cars: Vec<ComparableCar>,
}

/// Prices one vehicle against the current inventory snapshot. Comparable
/// sales win when any matching listing carries a parseable price; otherwise
/// the depreciation model supplies the base.
pub(crate) fn value_vehicle(
    input: &AppraisalInput,
    inventory: &[ComparableCar],
    as_of: NaiveDate,
) -> ValuationBreakdown {
    let query = ComparableQuery::from_vehicle(&input.vehicle);
    let matched = comparables::find_comparables(inventory, &query);

    let (base_value, source) = match matched.average_price {
        Some(average) => (average, BaseValueSource::ComparableSales),
        None => (
            depreciation::estimate_base_value(&input.vehicle, as_of),
            BaseValueSource::Depreciation,
        ),
    };

    let adjustments = adjustments::build_ledger(input, base_value, as_of);
    let total: f64 = adjustments.iter().map(AdjustmentEntry::signed_amount).sum();
    let retail_value = (base_value + total).max(0.0);

    let similar_cars = matched
        .matches
        .into_iter()
        .take(SIMILAR_CAR_LIMIT)
        .collect();

    ValuationBreakdown {
        base_value,
        source,
        retail_value,
        adjustments,
        similar_cars,
    }
}
