//! Persistence boundary for the family tree seeder.
//!
//! The tree generator never talks to a database directly. It hands finished
//! batches to a [`PersistenceSink`], which owns atomicity: a batch is either
//! stored whole or rejected whole.
//!
//! ```text
//! Tree generation
//!     |
//!     +-- create_persons(all persons)   --> sink
//!     +-- create_events(all events)     --> sink
//!     +-- update_user_person(root)      --> sink
//! ```
//!
//! # Modules
//!
//! - [`sink`] -- The [`PersistenceSink`] trait
//! - [`memory`] -- [`MemoryStore`], an in-memory sink with the account-level
//!   operations (register, clear a user's tree) the seeding binary needs
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod sink;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sink::PersistenceSink;
