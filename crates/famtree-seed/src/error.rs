//! Error types for the seeding binary.
//!
//! [`SeedError`] is the top-level error type that wraps all possible
//! failure modes of a seeding run.

/// Top-level error for the seeding binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: famtree_generator::ConfigError,
    },

    /// The `seed` section of the configuration is unusable.
    #[error("seed config error: {message}")]
    SeedConfig {
        /// Description of the problem.
        message: String,
    },

    /// Registering or clearing the root user failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: famtree_store::StoreError,
    },

    /// Tree generation failed.
    #[error("generation error: {source}")]
    Generation {
        /// The underlying generation error.
        #[from]
        source: famtree_generator::GenerationError,
    },

    /// The run summary could not be serialized.
    #[error("failed to serialize summary: {message}")]
    Summary {
        /// Description of the serialization failure.
        message: String,
    },
}
