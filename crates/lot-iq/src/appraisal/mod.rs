//! Vehicle appraisal intake, valuation, and decisioning.
//!
//! A raw form submission passes the intake guard, is priced against the
//! inventory snapshot by the engine, and comes back as an `AppraisalResult`
//! carrying the decision, the itemized adjustment ledger, and the offer
//! economics. The engine itself is pure; time enters only as an explicit
//! as-of date.

mod decision;
pub mod domain;
mod engine;
pub mod intake;
mod offer;
pub mod repository;
pub mod router;
pub mod service;
pub mod settings;
mod tables;
pub(crate) mod valuation;
pub mod vin;

#[cfg(test)]
mod tests;

pub use domain::{
    AccidentLevel, AdjustmentDirection, AdjustmentEntry, AppraisalDecision, AppraisalInput,
    AppraisalResult, AppraisalSubmission, BaseValueSource, BodyType, ComparableCar,
    ComparablePreview, ComparableQuery, ConditionFacts, ConditionInput, HistoryFacts,
    HistoryInput, NaaaGrade, Province, RepairItem, RustLevel, TitleType, VehicleFacts,
    VehicleInput,
};
pub use engine::AppraisalEngine;
pub use intake::{IntakeError, IntakeGuard};
pub use repository::{InventoryError, InventoryStore};
pub use router::appraisal_router;
pub use service::{AppraisalService, AppraisalServiceError};
pub use settings::{BusinessSettings, SettingsOverride};
pub use vin::{normalize_vin, DecodedVin, VinDecodeError, VinDecoder};
