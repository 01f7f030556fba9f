//! Error types for the persistence boundary.

/// Errors a persistence sink can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same identifier already exists, or the batch
    /// itself repeats an identifier.
    #[error("duplicate {entity} identifier: {id}")]
    DuplicateIdentifier {
        /// The kind of record (`person`, `event`, `user`).
        entity: &'static str,
        /// The colliding identifier.
        id: String,
    },

    /// The record to update or clear does not exist.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// The kind of record (`person`, `event`, `user`).
        entity: &'static str,
        /// The key that was looked up.
        key: String,
    },
}
