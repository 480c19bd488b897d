//! Core crate for the LotIQ appraisal service.
//!
//! The `appraisal` module holds the valuation engine, decision rules, and the
//! HTTP surface for submitting vehicles. `inventory` covers the CSV import
//! path that feeds comparable listings into the engine. The remaining modules
//! carry the service plumbing shared with the API binary.

pub mod appraisal;
pub mod config;
pub mod error;
pub mod inventory;
pub mod telemetry;
