use thiserror::Error;

/// Failure of a bulk action run.
///
/// Returned when a handler hook fails partway through a record collection.
/// Iteration stops at the failing record; `processed` reports how many
/// records were handled before it. No notice is emitted for a failed run.
#[derive(Debug, Error)]
#[error("action `{action}` failed after processing {processed} records: {source}")]
pub struct ActionError {
    /// Display name of the failing action.
    pub action: String,
    /// Records handled before the failure.
    pub processed: usize,
    /// The handler's error.
    #[source]
    pub source: anyhow::Error,
}
