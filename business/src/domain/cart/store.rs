use super::model::CartState;

/// Port for the durable cart snapshot, keyed by a fixed well-known name.
pub trait CartStore: Send + Sync {
    /// Persists the ordered entry list. Callers treat a failed save as
    /// non-fatal; the in-memory cart stays authoritative for the session and
    /// the loss only surfaces on the next reload.
    fn save(&self, state: &CartState) -> Result<(), SnapshotError>;

    /// Restores the last persisted cart. Missing or malformed data yields an
    /// empty cart, never an error.
    fn load(&self) -> CartState;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot.encode")]
    Encode,
    #[error("snapshot.write")]
    Write,
}
