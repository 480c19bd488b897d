use super::SIMILAR_CAR_LIMIT;
use crate::appraisal::domain::{ComparableCar, ComparablePreview, ComparableQuery};

/// Model years considered the same market as the queried year.
const YEAR_WINDOW: i32 = 2;

pub(crate) struct ComparableMatch {
    pub(crate) matches: Vec<ComparableCar>,
    pub(crate) average_price: Option<f64>,
}

/// Matches inventory listings against the queried vehicle. Make and model
/// compare case-insensitively; the year window only applies when the query
/// carries a year; the trim is a case-insensitive substring narrowing that
/// is discarded when it would empty the set.
pub(crate) fn find_comparables(
    inventory: &[ComparableCar],
    query: &ComparableQuery,
) -> ComparableMatch {
    let make = query.make.trim();
    let model = query.model.trim();

    let mut matches: Vec<ComparableCar> = inventory
        .iter()
        .filter(|car| {
            car.make.trim().eq_ignore_ascii_case(make)
                && car.model.trim().eq_ignore_ascii_case(model)
        })
        .filter(|car| match query.year {
            Some(year) => car
                .parsed_year()
                .is_some_and(|candidate| (candidate - year).abs() <= YEAR_WINDOW),
            None => true,
        })
        .cloned()
        .collect();

    if let Some(trim) = query.trim.as_deref() {
        let needle = trim.trim().to_ascii_lowercase();
        let narrowed: Vec<ComparableCar> = matches
            .iter()
            .filter(|car| car.trim.to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect();
        if !narrowed.is_empty() {
            matches = narrowed;
        }
    }

    let prices: Vec<f64> = matches
        .iter()
        .filter_map(ComparableCar::parsed_price)
        .collect();
    let average_price = if prices.is_empty() {
        None
    } else {
        Some(prices.iter().sum::<f64>() / prices.len() as f64)
    };

    ComparableMatch {
        matches,
        average_price,
    }
}

/// Lookup response for the form preview endpoint.
pub(crate) fn preview_comparables(
    inventory: &[ComparableCar],
    query: &ComparableQuery,
) -> ComparablePreview {
    let matched = find_comparables(inventory, query);
    ComparablePreview {
        total_matches: matched.matches.len(),
        average_price: matched.average_price,
        sample: matched
            .matches
            .into_iter()
            .take(SIMILAR_CAR_LIMIT)
            .collect(),
    }
}
