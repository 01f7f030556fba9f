//! The persistence sink trait.
//!
//! Implementations of this trait receive the bulk writes at the end of a
//! tree generation. The generator calls each method at most once per run,
//! in the order persons, events, user, and stops at the first error.

use famtree_types::{Event, Person, PersonId};

use crate::error::StoreError;

/// A durable destination for generated family tree records.
///
/// Every method is all-or-nothing: on error, nothing from the batch may
/// remain stored.
pub trait PersistenceSink {
    /// Store a batch of persons.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateIdentifier`] if any person ID already
    /// exists or appears twice in the batch.
    fn create_persons(&mut self, persons: &[Person]) -> Result<(), StoreError>;

    /// Store a batch of events.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateIdentifier`] if any event ID already
    /// exists or appears twice in the batch.
    fn create_events(&mut self, events: &[Event]) -> Result<(), StoreError>;

    /// Point the user's root person at `person_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has this username.
    fn update_user_person(&mut self, username: &str, person_id: PersonId)
    -> Result<(), StoreError>;
}
