use chrono::{Datelike, NaiveDate};

use super::domain::{
    AppraisalInput, AppraisalSubmission, BodyType, ConditionFacts, HistoryFacts, NaaaGrade,
    Province, VehicleFacts,
};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("insufficient input: make and model are required")]
    InsufficientInput,
    #[error("kilometers must be a non-negative number, got '{0}'")]
    InvalidKilometers(String),
    #[error("msrp must be a non-negative number, got '{0}'")]
    InvalidMsrp(String),
    #[error("model year '{raw}' is not a year up to {as_of_year}")]
    InvalidYear { raw: String, as_of_year: i32 },
    #[error("NAAA grade must be between 0 and 5, got {0}")]
    GradeOutOfRange(u8),
    #[error("owner count must be at least 1")]
    OwnerCountZero,
}

/// Guard responsible for turning raw form submissions into validated
/// appraisal facts. Free-text fields that fail to parse as an enum key
/// degrade to `None`; numeric fields that fail to parse are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn facts_from_submission(
        &self,
        submission: AppraisalSubmission,
        as_of: NaiveDate,
    ) -> Result<AppraisalInput, IntakeError> {
        let vehicle = submission.vehicle;

        let make = vehicle.make.trim().to_string();
        let model = vehicle.model.trim().to_string();
        if make.is_empty() || model.is_empty() {
            return Err(IntakeError::InsufficientInput);
        }

        let year = parse_year(&vehicle.year, as_of)?;
        let kilometers = parse_kilometers(&vehicle.kilometers)?;
        let msrp = parse_msrp(&vehicle.msrp)?;

        let condition = submission.condition;
        let grade = NaaaGrade::new(condition.naaa_grade)
            .ok_or(IntakeError::GradeOutOfRange(condition.naaa_grade))?;

        let history = submission.history;
        if history.owner_count == 0 {
            return Err(IntakeError::OwnerCountZero);
        }

        Ok(AppraisalInput {
            vehicle: VehicleFacts {
                make,
                model,
                year,
                trim: optional_text(&vehicle.trim),
                kilometers,
                body_type: BodyType::parse(&vehicle.body_type),
                province: Province::parse(&vehicle.province),
                msrp,
                engine: optional_text(&vehicle.engine),
                transmission: optional_text(&vehicle.transmission),
            },
            condition: ConditionFacts {
                grade,
                brake_pad_mm: condition.brake_pad_mm,
                tire_tread_mm: condition.tire_tread_mm,
                check_engine_light: condition.check_engine_light,
                rough_idle: condition.rough_idle,
                excessive_smoke: condition.excessive_smoke,
                transmission_slipping: condition.transmission_slipping,
                rust: condition.rust,
                repairs: condition.repairs,
            },
            history: HistoryFacts {
                title_type: history.title_type,
                accident_level: history.accident_level,
                accident_count: history.accident_count,
                odometer_tampering: history.odometer_tampering,
                active_recalls: history.active_recalls,
                frame_damage: history.frame_damage,
                frame_damage_repaired: history.frame_damage_repaired,
                stolen: history.stolen,
                previous_rental: history.previous_rental,
                previous_taxi: history.previous_taxi,
                missing_service_records: history.missing_service_records,
                specialty_vehicle: history.specialty_vehicle,
                bc_alberta_history: history.bc_alberta_history,
                owner_count: history.owner_count,
            },
        })
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clean_number(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect()
}

/// Blank years stay unknown; anything else must parse and cannot postdate
/// the as-of year.
fn parse_year(raw: &str, as_of: NaiveDate) -> Result<Option<i32>, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let as_of_year = as_of.year();
    let year = trimmed
        .parse::<i32>()
        .map_err(|_| IntakeError::InvalidYear {
            raw: raw.to_string(),
            as_of_year,
        })?;
    if year > as_of_year {
        return Err(IntakeError::InvalidYear {
            raw: raw.to_string(),
            as_of_year,
        });
    }
    Ok(Some(year))
}

/// Blank odometer fields read as zero, matching the form's placeholder.
fn parse_kilometers(raw: &str) -> Result<f64, IntakeError> {
    let cleaned = clean_number(raw);
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| IntakeError::InvalidKilometers(raw.to_string()))
}

fn parse_msrp(raw: &str) -> Result<Option<f64>, IntakeError> {
    let cleaned = clean_number(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(Some)
        .ok_or_else(|| IntakeError::InvalidMsrp(raw.to_string()))
}
