//! The generation ledger: an append-only log of fabricated records.
//!
//! # Design
//!
//! - **Append-only**: records are never modified or removed once recorded.
//! - **Ordered**: persons and events keep their creation order.
//! - **Single owner**: one ledger per generation invocation, never shared.
//! - **Success is explicit**: the flag is raised only by the caller once
//!   every bulk write has been accepted by storage.

use famtree_types::{Event, Person};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GenerationResult
// ---------------------------------------------------------------------------

/// Caller-facing summary of a generation attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Whether the whole tree was fabricated and persisted.
    pub success: bool,
    /// Number of persons created (zero on failure).
    pub persons_created: usize,
    /// Number of events created (zero on failure).
    pub events_created: usize,
}

impl GenerationResult {
    /// The result reported for any failed generation.
    ///
    /// Generation is all-or-nothing, so a failure never reports counts.
    pub const fn failed() -> Self {
        Self {
            success: false,
            persons_created: 0,
            events_created: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationLedger
// ---------------------------------------------------------------------------

/// Accumulates every person and event created by one tree generation.
#[derive(Debug, Default, Clone)]
pub struct GenerationLedger {
    /// Persons, in creation order.
    persons: Vec<Person>,
    /// Events, in creation order.
    events: Vec<Event>,
    /// Set once storage has accepted every batch.
    success: bool,
}

impl GenerationLedger {
    /// Create a new empty ledger.
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
            events: Vec::new(),
            success: false,
        }
    }

    /// Create an empty ledger with room for the given record counts.
    pub fn with_capacity(persons: usize, events: usize) -> Self {
        Self {
            persons: Vec::with_capacity(persons),
            events: Vec::with_capacity(events),
            success: false,
        }
    }

    /// Append a fabricated person.
    pub fn record_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Append a fabricated event.
    pub fn record_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of persons recorded so far.
    pub const fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Number of events recorded so far.
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// All recorded persons, in creation order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// All recorded events, in creation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Mark the generation as fully persisted.
    pub fn mark_success(&mut self) {
        tracing::debug!(
            persons = self.persons.len(),
            events = self.events.len(),
            "Generation ledger marked successful"
        );
        self.success = true;
    }

    /// Whether [`mark_success`](Self::mark_success) has been called.
    pub const fn is_successful(&self) -> bool {
        self.success
    }

    /// Summarize the ledger for the caller.
    ///
    /// An unsuccessful ledger reports [`GenerationResult::failed`] no matter
    /// how many records it holds, since nothing in it was committed.
    pub const fn result(&self) -> GenerationResult {
        if self.success {
            GenerationResult {
                success: true,
                persons_created: self.persons.len(),
                events_created: self.events.len(),
            }
        } else {
            GenerationResult::failed()
        }
    }

    /// Consume the ledger, returning its persons and events.
    pub fn into_parts(self) -> (Vec<Person>, Vec<Event>) {
        (self.persons, self.events)
    }
}

#[cfg(test)]
mod tests {
    use famtree_types::{EventId, EventType, Gender, Location, PersonId};

    use super::*;

    fn person(first: &str) -> Person {
        Person::new(PersonId::new(), "sillysally", first, "Black", Gender::Female)
    }

    fn birth_of(owner: &Person, year: u32) -> Event {
        let here = Location {
            latitude: 0.0,
            longitude: 0.0,
            country: String::from("Nowhere"),
            city: String::from("Nowhere"),
        };
        Event::new(EventId::new(), owner, EventType::Birth, year, &here)
    }

    #[test]
    fn new_ledger_is_empty_and_unsuccessful() {
        let ledger = GenerationLedger::new();
        assert_eq!(ledger.person_count(), 0);
        assert_eq!(ledger.event_count(), 0);
        assert!(!ledger.is_successful());
    }

    #[test]
    fn records_preserve_creation_order() {
        let mut ledger = GenerationLedger::new();
        let sally = person("Sally");
        let amy = person("Amy");
        ledger.record_event(birth_of(&sally, 2000));
        ledger.record_event(birth_of(&amy, 1971));
        ledger.record_person(sally);
        ledger.record_person(amy);

        let names: Vec<&str> = ledger.persons().iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Sally", "Amy"]);
        let years: Vec<u32> = ledger.events().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2000, 1971]);
    }

    #[test]
    fn result_hides_counts_until_marked_successful() {
        let mut ledger = GenerationLedger::new();
        let sally = person("Sally");
        ledger.record_event(birth_of(&sally, 2000));
        ledger.record_person(sally);

        assert_eq!(ledger.result(), GenerationResult::failed());

        ledger.mark_success();
        assert_eq!(
            ledger.result(),
            GenerationResult {
                success: true,
                persons_created: 1,
                events_created: 1,
            }
        );
    }

    #[test]
    fn into_parts_returns_everything() {
        let mut ledger = GenerationLedger::with_capacity(1, 1);
        let sally = person("Sally");
        ledger.record_event(birth_of(&sally, 2000));
        ledger.record_person(sally);

        let (persons, events) = ledger.into_parts();
        assert_eq!(persons.len(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(GenerationResult {
            success: true,
            persons_created: 31,
            events_created: 91,
        })
        .ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "success": true,
                "personsCreated": 31,
                "eventsCreated": 91
            }))
        );
    }
}
