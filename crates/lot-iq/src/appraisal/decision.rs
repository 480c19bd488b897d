use chrono::NaiveDate;

use super::domain::{AccidentLevel, AppraisalDecision, AppraisalInput, NaaaGrade, TitleType};

const MAX_ACQUISITION_KM: f64 = 300_000.0;
const WHOLESALE_KM_FLOOR: f64 = 200_000.0;
const MAX_VEHICLE_AGE: i32 = 15;
const WHOLESALE_AGE_FLOOR: i32 = 10;
const WHOLESALE_ACCIDENT_COUNT: u8 = 3;

/// Acquisition lane plus the human-readable reasons behind it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DecisionOutcome {
    pub(crate) decision: AppraisalDecision,
    pub(crate) reasons: Vec<String>,
}

/// Walks the hard-stop rejections in order, short-circuiting on the first
/// hit, then accumulates every wholesale condition that applies. Age rules
/// are skipped entirely when the model year was not supplied.
pub(crate) fn evaluate(input: &AppraisalInput, as_of: NaiveDate) -> DecisionOutcome {
    let vehicle = &input.vehicle;
    let condition = &input.condition;
    let history = &input.history;
    let age = vehicle.age_years(as_of);

    if history.title_type.is_branded() {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec![format!(
                "{} Title - automatic rejection",
                history.title_type.label()
            )],
        };
    }

    if history.odometer_tampering {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec!["Odometer tampering on record - automatic rejection".to_string()],
        };
    }

    if history.active_recalls {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec!["Active unrepaired safety recalls - automatic rejection".to_string()],
        };
    }

    if history.frame_damage && !history.frame_damage_repaired {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec!["Unrepaired frame damage - automatic rejection".to_string()],
        };
    }

    if vehicle.kilometers > MAX_ACQUISITION_KM {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec![format!(
                "Odometer {:.0} km exceeds the {:.0} km acquisition limit",
                vehicle.kilometers, MAX_ACQUISITION_KM
            )],
        };
    }

    if let Some(age) = age {
        if age > MAX_VEHICLE_AGE && !history.specialty_vehicle {
            return DecisionOutcome {
                decision: AppraisalDecision::Reject,
                reasons: vec![format!(
                    "Vehicle is {age} years old, past the {MAX_VEHICLE_AGE} year limit for non-specialty stock"
                )],
            };
        }
    }

    if history.stolen {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec!["Reported stolen - automatic rejection".to_string()],
        };
    }

    if condition.grade == NaaaGrade::INOPERATIVE {
        return DecisionOutcome {
            decision: AppraisalDecision::Reject,
            reasons: vec!["NAAA grade 0 (inoperative) - automatic rejection".to_string()],
        };
    }

    let mut wholesale_reasons = Vec::new();

    if (WHOLESALE_KM_FLOOR..=MAX_ACQUISITION_KM).contains(&vehicle.kilometers) {
        wholesale_reasons.push(format!(
            "Odometer {:.0} km falls in the {:.0}-{:.0} km wholesale band",
            vehicle.kilometers, WHOLESALE_KM_FLOOR, MAX_ACQUISITION_KM
        ));
    }

    if let Some(age) = age {
        if (WHOLESALE_AGE_FLOOR..=MAX_VEHICLE_AGE).contains(&age) {
            wholesale_reasons.push(format!(
                "Vehicle age {age} years falls in the {WHOLESALE_AGE_FLOOR}-{MAX_VEHICLE_AGE} year wholesale band"
            ));
        }
    }

    if history.title_type == TitleType::Rebuilt {
        wholesale_reasons.push("Rebuilt title".to_string());
    }

    if history.accident_count >= WHOLESALE_ACCIDENT_COUNT {
        wholesale_reasons.push(format!("{} reported accidents", history.accident_count));
    }

    if history.accident_level >= AccidentLevel::Major {
        wholesale_reasons.push(format!(
            "{} accident history",
            history.accident_level.label()
        ));
    }

    if history.frame_damage && history.frame_damage_repaired {
        wholesale_reasons.push("Previously repaired frame damage".to_string());
    }

    let symptoms = condition.mechanical_symptoms();
    if !symptoms.is_empty() {
        wholesale_reasons.push(format!(
            "Mechanical symptoms reported: {}",
            symptoms.join(", ")
        ));
    }

    if condition.check_engine_light {
        wholesale_reasons.push("Check engine light is on".to_string());
    }

    if !wholesale_reasons.is_empty() {
        return DecisionOutcome {
            decision: AppraisalDecision::Wholesale,
            reasons: wholesale_reasons,
        };
    }

    DecisionOutcome {
        decision: AppraisalDecision::Buy,
        reasons: vec!["Meets retail acquisition standards".to_string()],
    }
}
