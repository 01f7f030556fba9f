//! Tree-shape verification for a generation ledger.
//!
//! A full binary ancestry tree has a closed-form census. Given `g` ancestor
//! generations above the root:
//!
//! ```text
//! persons   = 2^(g+1) - 1
//! births    = persons
//! deaths    = persons - 1          (the root is alive)
//! marriages = persons - 1          (two per couple, (persons-1)/2 couples)
//! events    = 3 * persons - 2
//! ```
//!
//! The generator's recursion guarantees this by construction; the check
//! exists so a regression in the recursion is caught before anything is
//! written to storage.

use std::collections::BTreeMap;

use famtree_types::EventType;

use crate::ledger::GenerationLedger;

/// The result of a census check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CensusResult {
    /// The ledger holds exactly a full tree of the requested depth.
    Balanced,
    /// The ledger's counts disagree with the expected tree shape.
    Mismatch(CensusMismatch),
}

/// Details of a census disagreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusMismatch {
    /// Requested ancestor generations.
    pub generations: u32,
    /// Per-event-type counts that did not match: (expected, actual).
    pub event_imbalances: BTreeMap<EventType, (usize, usize)>,
    /// Expected and actual person counts.
    pub persons: (usize, usize),
    /// Human-readable description.
    pub message: String,
}

impl core::fmt::Display for CensusMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Persons in a full tree with `generations` ancestor layers.
///
/// Returns `None` if the count does not fit in a `usize`.
pub fn expected_persons(generations: u32) -> Option<usize> {
    let layers = generations.checked_add(1)?;
    1_usize.checked_shl(layers)?.checked_sub(1)
}

/// Events in a full tree holding `persons` persons.
///
/// Returns `None` for an empty tree or on overflow.
pub fn expected_events(persons: usize) -> Option<usize> {
    persons.checked_mul(3)?.checked_sub(2)
}

/// Count the ledger's events per [`EventType`].
pub fn event_tally(ledger: &GenerationLedger) -> BTreeMap<EventType, usize> {
    let mut tally = BTreeMap::new();
    for event in ledger.events() {
        let count: &mut usize = tally.entry(event.event_type).or_default();
        *count = count.saturating_add(1);
    }
    tally
}

/// Check that `ledger` holds exactly a full tree of `generations` layers.
pub fn verify_census(ledger: &GenerationLedger, generations: u32) -> CensusResult {
    let actual_persons = ledger.person_count();
    let Some(persons) = expected_persons(generations) else {
        return CensusResult::Mismatch(CensusMismatch {
            generations,
            event_imbalances: BTreeMap::new(),
            persons: (0, actual_persons),
            message: format!("census for {generations} generations overflows"),
        });
    };
    let ancestors = persons.saturating_sub(1);

    let tally = event_tally(ledger);
    let expected = [
        (EventType::Birth, persons),
        (EventType::Death, ancestors),
        (EventType::Marriage, ancestors),
    ];

    let mut event_imbalances = BTreeMap::new();
    for (event_type, want) in expected {
        let got = tally.get(&event_type).copied().unwrap_or(0);
        if got != want {
            event_imbalances.insert(event_type, (want, got));
        }
    }

    if event_imbalances.is_empty() && actual_persons == persons {
        return CensusResult::Balanced;
    }

    let message = format!(
        "tree census mismatch for {generations} generations: expected {persons} persons \
         and {} events, found {actual_persons} persons and {} events",
        expected_events(persons).unwrap_or(0),
        ledger.event_count(),
    );
    CensusResult::Mismatch(CensusMismatch {
        generations,
        event_imbalances,
        persons: (persons, actual_persons),
        message,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use famtree_types::{Event, EventId, Gender, Location, Person, PersonId};

    use super::*;

    fn nowhere() -> Location {
        Location {
            latitude: 0.0,
            longitude: 0.0,
            country: String::from("Nowhere"),
            city: String::from("Nowhere"),
        }
    }

    /// A hand-built one-generation tree: root, mother, father.
    fn one_generation() -> GenerationLedger {
        let mut ledger = GenerationLedger::new();
        let root = Person::new(PersonId::new(), "sillysally", "Sally", "Black", Gender::Female);
        let mother = Person::new(PersonId::new(), "sillysally", "Amy", "Thomson", Gender::Female);
        let father = Person::new(PersonId::new(), "sillysally", "Gregory", "Black", Gender::Male);

        let here = nowhere();
        ledger.record_event(Event::new(EventId::new(), &root, EventType::Birth, 2000, &here));
        for (p, birth, death) in [(&mother, 1971, 2020), (&father, 1970, 2023)] {
            ledger.record_event(Event::new(EventId::new(), p, EventType::Birth, birth, &here));
            ledger.record_event(Event::new(EventId::new(), p, EventType::Death, death, &here));
        }
        ledger.record_event(Event::new(EventId::new(), &mother, EventType::Marriage, 1990, &here));
        ledger.record_event(Event::new(EventId::new(), &father, EventType::Marriage, 1990, &here));

        ledger.record_person(root);
        ledger.record_person(mother);
        ledger.record_person(father);
        ledger
    }

    #[test]
    fn expected_counts_follow_closed_form() {
        assert_eq!(expected_persons(0), Some(1));
        assert_eq!(expected_persons(4), Some(31));
        assert_eq!(expected_persons(6), Some(127));
        assert_eq!(expected_events(1), Some(1));
        assert_eq!(expected_events(31), Some(91));
        assert_eq!(expected_events(127), Some(379));
        assert_eq!(expected_events(0), None);
    }

    #[test]
    fn expected_persons_overflow_is_none() {
        assert_eq!(expected_persons(u32::MAX), None);
        assert_eq!(expected_persons(200), None);
    }

    #[test]
    fn full_tree_is_balanced() {
        assert_eq!(verify_census(&one_generation(), 1), CensusResult::Balanced);
    }

    #[test]
    fn wrong_depth_reports_mismatch() {
        let result = verify_census(&one_generation(), 2);
        let CensusResult::Mismatch(mismatch) = result else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.persons, (7, 3));
        assert_eq!(mismatch.event_imbalances.get(&EventType::Birth), Some(&(7, 3)));
        assert!(mismatch.message.contains("expected 7 persons and 19 events"));
    }

    #[test]
    fn missing_marriage_is_detected() {
        let mut ledger = GenerationLedger::new();
        let (persons, mut events) = one_generation().into_parts();
        events.retain(|e| e.event_type != EventType::Marriage);
        for p in persons {
            ledger.record_person(p);
        }
        for e in events {
            ledger.record_event(e);
        }

        let CensusResult::Mismatch(mismatch) = verify_census(&ledger, 1) else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.event_imbalances.len(), 1);
        assert_eq!(
            mismatch.event_imbalances.get(&EventType::Marriage),
            Some(&(2, 0))
        );
    }

    #[test]
    fn tally_counts_each_type() {
        let tally = event_tally(&one_generation());
        assert_eq!(tally.get(&EventType::Birth), Some(&3));
        assert_eq!(tally.get(&EventType::Death), Some(&2));
        assert_eq!(tally.get(&EventType::Marriage), Some(&2));
    }
}
