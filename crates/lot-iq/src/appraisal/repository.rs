use super::domain::ComparableCar;

/// Read-only view of the lot inventory so the service module can be
/// exercised against fakes in tests and a real store in production.
pub trait InventoryStore: Send + Sync {
    /// Snapshot of every listing currently on the lot.
    fn comparables(&self) -> Result<Vec<ComparableCar>, InventoryError>;
}

/// Error enumeration for inventory access failures.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory unavailable: {0}")]
    Unavailable(String),
}
