//! Error types for the famtree-generator crate.
//!
//! Fabrication never panics. Every failure is one of the typed errors
//! below: constraint violations and census mismatches indicate a defect in
//! the recursion, storage errors come from the persistence sink, and
//! reference data problems are recovered inside the content provider.

use std::path::PathBuf;

use famtree_ledger::CensusMismatch;
use famtree_store::StoreError;
use famtree_types::EventType;

/// A computed year range cannot be honored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// The lower bound of a range lies after its upper bound.
    #[error("inverted {event} year range: lower bound {lower} is after upper bound {upper}")]
    InvertedRange {
        /// The event whose range was computed.
        event: EventType,
        /// The computed lower bound.
        lower: u32,
        /// The computed upper bound.
        upper: u32,
    },

    /// A bound would fall before year 1 or overflow.
    #[error("{event} year out of range: {context}")]
    YearOutOfRange {
        /// The event whose range was computed.
        event: EventType,
        /// Description of the offending computation.
        context: String,
    },

    /// A parent node was requested for a node with no generations left.
    #[error("cannot derive parents: no generations remaining")]
    GenerationsExhausted,
}

/// A reference dataset could not be used.
///
/// Never escapes the content provider: the affected category falls back to
/// its placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceDataError {
    /// The dataset file could not be read.
    #[error("failed to read reference data at '{path}': {message}")]
    Io {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset file is not valid `{"data": [...]}` JSON.
    #[error("invalid reference data JSON at '{path}': {message}")]
    Parse {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// The dataset file holds no entries.
    #[error("reference data at '{path}' is empty")]
    Empty {
        /// Path to the dataset file.
        path: PathBuf,
    },
}

/// Errors that abort a tree generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// A year range was inverted or out of bounds.
    #[error("constraint error: {0}")]
    Constraint(#[from] ConstraintError),

    /// The persistence sink rejected a batch.
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// The requested depth exceeds the configured maximum.
    #[error("requested {requested} generations, maximum is {max}")]
    TooManyGenerations {
        /// Resolved generation count.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// The fabricated tree does not have the expected shape.
    #[error("census error: {0}")]
    CensusMismatch(CensusMismatch),
}

impl From<CensusMismatch> for GenerationError {
    fn from(mismatch: CensusMismatch) -> Self {
        Self::CensusMismatch(mismatch)
    }
}
