use super::common::*;

use crate::appraisal::domain::{BodyType, Province};
use crate::appraisal::intake::IntakeError;

#[test]
fn rejects_blank_make_or_model() {
    let mut blank = submission();
    blank.vehicle.make = String::new();
    match guard().facts_from_submission(blank, as_of()) {
        Err(IntakeError::InsufficientInput) => {}
        other => panic!("expected InsufficientInput, got {other:?}"),
    }

    let mut spaces = submission();
    spaces.vehicle.model = "   ".to_string();
    match guard().facts_from_submission(spaces, as_of()) {
        Err(IntakeError::InsufficientInput) => {}
        other => panic!("expected InsufficientInput, got {other:?}"),
    }
}

#[test]
fn trims_free_text_fields() {
    let mut padded = submission();
    padded.vehicle.make = "  Toyota  ".to_string();
    padded.vehicle.trim = " XLE ".to_string();
    padded.vehicle.engine = String::new();

    let input = guard()
        .facts_from_submission(padded, as_of())
        .unwrap_or_else(|err| panic!("intake failed: {err}"));

    assert_eq!(input.vehicle.make, "Toyota");
    assert_eq!(input.vehicle.trim.as_deref(), Some("XLE"));
    assert_eq!(input.vehicle.engine, None);
}

#[test]
fn parses_formatted_numbers() {
    let mut formatted = submission();
    formatted.vehicle.kilometers = "$60,000".to_string();
    formatted.vehicle.msrp = "45 000".to_string();

    let input = guard()
        .facts_from_submission(formatted, as_of())
        .unwrap_or_else(|err| panic!("intake failed: {err}"));

    assert_close(input.vehicle.kilometers, 60_000.0);
    assert_eq!(input.vehicle.msrp, Some(45_000.0));
}

#[test]
fn blank_numeric_fields_fall_back_to_defaults() {
    let mut bare = submission();
    bare.vehicle.year = String::new();
    bare.vehicle.kilometers = String::new();
    bare.vehicle.msrp = String::new();

    let input = guard()
        .facts_from_submission(bare, as_of())
        .unwrap_or_else(|err| panic!("intake failed: {err}"));

    assert_eq!(input.vehicle.year, None);
    assert_close(input.vehicle.kilometers, 0.0);
    assert_eq!(input.vehicle.msrp, None);
}

#[test]
fn rejects_garbled_or_negative_kilometers() {
    for raw in ["around 90k", "-500"] {
        let mut bad = submission();
        bad.vehicle.kilometers = raw.to_string();
        match guard().facts_from_submission(bad, as_of()) {
            Err(IntakeError::InvalidKilometers(value)) => assert_eq!(value, raw),
            other => panic!("expected InvalidKilometers, got {other:?}"),
        }
    }
}

#[test]
fn rejects_unparseable_msrp() {
    let mut bad = submission();
    bad.vehicle.msrp = "call us".to_string();
    match guard().facts_from_submission(bad, as_of()) {
        Err(IntakeError::InvalidMsrp(value)) => assert_eq!(value, "call us"),
        other => panic!("expected InvalidMsrp, got {other:?}"),
    }
}

#[test]
fn rejects_future_and_garbled_years() {
    let mut future = submission();
    future.vehicle.year = "2026".to_string();
    match guard().facts_from_submission(future, as_of()) {
        Err(IntakeError::InvalidYear { raw, as_of_year }) => {
            assert_eq!(raw, "2026");
            assert_eq!(as_of_year, 2025);
        }
        other => panic!("expected InvalidYear, got {other:?}"),
    }

    let mut garbled = submission();
    garbled.vehicle.year = "199x".to_string();
    match guard().facts_from_submission(garbled, as_of()) {
        Err(IntakeError::InvalidYear { raw, .. }) => assert_eq!(raw, "199x"),
        other => panic!("expected InvalidYear, got {other:?}"),
    }
}

#[test]
fn rejects_out_of_range_grades() {
    let mut bad = submission();
    bad.condition.naaa_grade = 6;
    match guard().facts_from_submission(bad, as_of()) {
        Err(IntakeError::GradeOutOfRange(6)) => {}
        other => panic!("expected GradeOutOfRange, got {other:?}"),
    }
}

#[test]
fn rejects_zero_owner_count() {
    let mut bad = submission();
    bad.history.owner_count = 0;
    match guard().facts_from_submission(bad, as_of()) {
        Err(IntakeError::OwnerCountZero) => {}
        other => panic!("expected OwnerCountZero, got {other:?}"),
    }
}

#[test]
fn unknown_enum_text_degrades_to_none() {
    let mut odd = submission();
    odd.vehicle.body_type = "spaceship".to_string();
    odd.vehicle.province = "Atlantis".to_string();

    let input = guard()
        .facts_from_submission(odd, as_of())
        .unwrap_or_else(|err| panic!("intake failed: {err}"));

    assert_eq!(input.vehicle.body_type, None);
    assert_eq!(input.vehicle.province, None);
}

#[test]
fn enum_text_accepts_common_spellings() {
    let mut spelled = submission();
    spelled.vehicle.body_type = "Crew Cab Pickup".to_string();
    spelled.vehicle.province = "British Columbia".to_string();

    let input = guard()
        .facts_from_submission(spelled, as_of())
        .unwrap_or_else(|err| panic!("intake failed: {err}"));

    assert_eq!(input.vehicle.body_type, Some(BodyType::Truck));
    assert_eq!(input.vehicle.province, Some(Province::BritishColumbia));
}
