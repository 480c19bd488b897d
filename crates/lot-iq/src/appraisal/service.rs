use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{AppraisalResult, AppraisalSubmission, ComparablePreview, ComparableQuery};
use super::engine::AppraisalEngine;
use super::intake::{IntakeError, IntakeGuard};
use super::repository::{InventoryError, InventoryStore};
use super::settings::BusinessSettings;
use super::valuation;

/// Service composing the intake guard, inventory store, and pricing engine.
pub struct AppraisalService<S> {
    guard: IntakeGuard,
    store: Arc<S>,
    engine: Arc<AppraisalEngine>,
}

impl<S> AppraisalService<S>
where
    S: InventoryStore + 'static,
{
    pub fn new(store: Arc<S>, settings: BusinessSettings) -> Self {
        Self {
            guard: IntakeGuard,
            store,
            engine: Arc::new(AppraisalEngine::new(settings)),
        }
    }

    /// Validate a submission and price it against the current inventory
    /// snapshot. The as-of date anchors age, mileage, and seasonal math.
    pub fn appraise(
        &self,
        submission: AppraisalSubmission,
        as_of: NaiveDate,
    ) -> Result<AppraisalResult, AppraisalServiceError> {
        let overrides = submission.settings.clone();
        let input = self.guard.facts_from_submission(submission, as_of)?;
        let inventory = self.store.comparables()?;
        Ok(self
            .engine
            .appraise_with(&input, &inventory, as_of, &overrides))
    }

    /// Comparable lookup for the form's live preview.
    pub fn comparables(
        &self,
        query: &ComparableQuery,
    ) -> Result<ComparablePreview, AppraisalServiceError> {
        if query.make.trim().is_empty() || query.model.trim().is_empty() {
            return Err(IntakeError::InsufficientInput.into());
        }
        let inventory = self.store.comparables()?;
        Ok(valuation::preview_comparables(&inventory, query))
    }
}

/// Error raised by the appraisal service.
#[derive(Debug, thiserror::Error)]
pub enum AppraisalServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
