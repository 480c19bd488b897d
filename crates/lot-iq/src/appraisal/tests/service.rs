use std::sync::Arc;

use super::common::*;

use crate::appraisal::domain::{AppraisalDecision, BaseValueSource, ComparableQuery};
use crate::appraisal::intake::IntakeError;
use crate::appraisal::repository::InventoryError;
use crate::appraisal::service::{AppraisalService, AppraisalServiceError};

#[test]
fn appraises_a_submission_end_to_end() {
    let (service, _store) = build_service();

    let result = service
        .appraise(submission(), as_of())
        .unwrap_or_else(|err| panic!("appraisal failed: {err}"));

    assert_eq!(result.decision, AppraisalDecision::Buy);
    assert_eq!(result.base_value_source, BaseValueSource::ComparableSales);
    assert_close(result.base_value, 22_000.0);
    assert!(result.similar_cars.len() <= 3);
}

#[test]
fn propagates_intake_errors() {
    let (service, _store) = build_service();

    let mut blank = submission();
    blank.vehicle.make = String::new();

    match service.appraise(blank, as_of()) {
        Err(AppraisalServiceError::Intake(IntakeError::InsufficientInput)) => {}
        other => panic!("expected intake error, got {other:?}"),
    }
}

#[test]
fn propagates_inventory_errors() {
    let service = AppraisalService::new(Arc::new(UnavailableInventory), business_settings());

    match service.appraise(submission(), as_of()) {
        Err(AppraisalServiceError::Inventory(InventoryError::Unavailable(message))) => {
            assert_eq!(message, "database offline");
        }
        other => panic!("expected inventory error, got {other:?}"),
    }
}

#[test]
fn desk_settings_ride_along_with_the_submission() {
    let (service, _store) = build_service();

    let mut priced = submission();
    priced.settings.profit_margin_amount = Some(1200.0);

    let result = service
        .appraise(priced, as_of())
        .unwrap_or_else(|err| panic!("appraisal failed: {err}"));

    assert_close(result.profit_margin, 1200.0);
}

#[test]
fn identical_submissions_serialize_identically() {
    let (service, _store) = build_service();

    let first = service
        .appraise(submission(), as_of())
        .unwrap_or_else(|err| panic!("appraisal failed: {err}"));
    let second = service
        .appraise(submission(), as_of())
        .unwrap_or_else(|err| panic!("appraisal failed: {err}"));

    let first = serde_json::to_string(&first).expect("serialize result");
    let second = serde_json::to_string(&second).expect("serialize result");
    assert_eq!(first, second);
}

#[test]
fn an_emptied_store_falls_back_to_depreciation() {
    let (service, store) = build_service();
    store.replace_all(Vec::new());

    let result = service
        .appraise(submission(), as_of())
        .unwrap_or_else(|err| panic!("appraisal failed: {err}"));

    assert_eq!(result.base_value_source, BaseValueSource::Depreciation);
    assert!(result.similar_cars.is_empty());
}

#[test]
fn comparables_previews_matches_and_average() {
    let (service, _store) = build_service();

    let query = ComparableQuery {
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: Some(2020),
        trim: None,
    };
    let preview = service
        .comparables(&query)
        .unwrap_or_else(|err| panic!("preview failed: {err}"));

    assert_eq!(preview.total_matches, 3);
    assert_close(preview.average_price.expect("average price"), 22_000.0);
    assert!(preview.sample.len() <= 3);
}

#[test]
fn comparables_average_is_absent_when_no_price_parses() {
    let (service, _store) = build_service();

    let query = ComparableQuery {
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: Some(2020),
        trim: Some("XLE".to_string()),
    };
    let preview = service
        .comparables(&query)
        .unwrap_or_else(|err| panic!("preview failed: {err}"));

    assert_eq!(preview.total_matches, 1);
    assert_eq!(preview.average_price, None);
}

#[test]
fn comparables_require_make_and_model() {
    let (service, _store) = build_service();

    let query = ComparableQuery {
        make: String::new(),
        model: "Camry".to_string(),
        year: None,
        trim: None,
    };
    match service.comparables(&query) {
        Err(AppraisalServiceError::Intake(IntakeError::InsufficientInput)) => {}
        other => panic!("expected intake error, got {other:?}"),
    }
}
