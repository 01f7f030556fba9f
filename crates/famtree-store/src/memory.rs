//! In-memory persistence sink.
//!
//! [`MemoryStore`] keeps users, persons and events in ordered maps. Batch
//! writes validate every identifier before inserting anything, which gives
//! the same all-or-nothing behavior a database transaction would.
//!
//! Beyond the [`PersistenceSink`] contract it carries the account-level
//! operations around tree generation: registering users, looking up a
//! user's records, and clearing a user's tree before it is regenerated.

use std::collections::{BTreeMap, BTreeSet};

use famtree_types::{Event, EventId, Person, PersonId, User};

use crate::error::StoreError;
use crate::sink::PersistenceSink;

/// Verify that no key in `keys` is already stored or repeated.
fn ensure_unique<K, V>(
    stored: &BTreeMap<K, V>,
    keys: impl IntoIterator<Item = K>,
    entity: &'static str,
) -> Result<(), StoreError>
where
    K: Ord + Copy + core::fmt::Display,
{
    let mut seen = BTreeSet::new();
    for key in keys {
        if stored.contains_key(&key) || !seen.insert(key) {
            return Err(StoreError::DuplicateIdentifier {
                entity,
                id: key.to_string(),
            });
        }
    }
    Ok(())
}

/// An in-memory store of users, persons and events.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// Registered accounts keyed by username.
    users: BTreeMap<String, User>,
    /// All persons keyed by ID.
    persons: BTreeMap<PersonId, Person>,
    /// All events keyed by ID.
    events: BTreeMap<EventId, Event>,
}

impl MemoryStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            persons: BTreeMap::new(),
            events: BTreeMap::new(),
        }
    }

    /// Register a batch of users.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateIdentifier`] if a username is taken
    /// or repeated; no user from the batch is stored in that case.
    pub fn create_users(&mut self, users: &[User]) -> Result<(), StoreError> {
        let mut seen = BTreeSet::new();
        for user in users {
            if self.users.contains_key(&user.username) || !seen.insert(user.username.as_str()) {
                return Err(StoreError::DuplicateIdentifier {
                    entity: "user",
                    id: user.username.clone(),
                });
            }
        }
        for user in users {
            self.users.insert(user.username.clone(), user.clone());
        }
        tracing::debug!(count = users.len(), "Stored users");
        Ok(())
    }

    /// Look up a user by username.
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Look up a person by ID.
    pub fn person(&self, person_id: PersonId) -> Option<&Person> {
        self.persons.get(&person_id)
    }

    /// All persons belonging to `username`.
    pub fn persons_for_user(&self, username: &str) -> Vec<&Person> {
        self.persons
            .values()
            .filter(|p| p.associated_username == username)
            .collect()
    }

    /// All events belonging to `username`.
    pub fn events_for_user(&self, username: &str) -> Vec<&Event> {
        self.events
            .values()
            .filter(|e| e.associated_username == username)
            .collect()
    }

    /// Total number of stored persons.
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Total number of stored events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Delete everything generated for `username`, keeping the account.
    ///
    /// Events go first, then the user's root link is cleared, then the
    /// persons. Returns the number of persons and events removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the user does not exist.
    pub fn clear_user_data(&mut self, username: &str) -> Result<(usize, usize), StoreError> {
        let user = self.users.get_mut(username).ok_or_else(|| StoreError::NotFound {
            entity: "user",
            key: username.to_owned(),
        })?;

        let events_before = self.events.len();
        self.events.retain(|_, e| e.associated_username != username);
        let events_removed = events_before.saturating_sub(self.events.len());

        user.person_id = None;

        let persons_before = self.persons.len();
        self.persons.retain(|_, p| p.associated_username != username);
        let persons_removed = persons_before.saturating_sub(self.persons.len());

        tracing::debug!(
            username,
            persons_removed,
            events_removed,
            "Cleared user tree data"
        );
        Ok((persons_removed, events_removed))
    }

    /// Remove every user, person and event.
    pub fn clear(&mut self) {
        self.users.clear();
        self.persons.clear();
        self.events.clear();
    }
}

impl PersistenceSink for MemoryStore {
    fn create_persons(&mut self, persons: &[Person]) -> Result<(), StoreError> {
        ensure_unique(&self.persons, persons.iter().map(|p| p.person_id), "person")?;
        for person in persons {
            self.persons.insert(person.person_id, person.clone());
        }
        tracing::debug!(count = persons.len(), "Stored persons");
        Ok(())
    }

    fn create_events(&mut self, events: &[Event]) -> Result<(), StoreError> {
        ensure_unique(&self.events, events.iter().map(|e| e.event_id), "event")?;
        for event in events {
            self.events.insert(event.event_id, event.clone());
        }
        tracing::debug!(count = events.len(), "Stored events");
        Ok(())
    }

    fn update_user_person(
        &mut self,
        username: &str,
        person_id: PersonId,
    ) -> Result<(), StoreError> {
        let user = self.users.get_mut(username).ok_or_else(|| StoreError::NotFound {
            entity: "user",
            key: username.to_owned(),
        })?;
        user.person_id = Some(person_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use famtree_types::{EventType, Gender, Location};

    use super::*;

    fn sally_user() -> User {
        User {
            username: String::from("sillysally"),
            password: String::from("password"),
            email: String::from("sally@email.test"),
            first_name: String::from("Sally"),
            last_name: String::from("Black"),
            gender: Gender::Female,
            person_id: None,
        }
    }

    fn person(username: &str, first: &str) -> Person {
        Person::new(PersonId::new(), username, first, "Black", Gender::Female)
    }

    fn birth(owner: &Person) -> Event {
        let provo = Location {
            latitude: 40.23,
            longitude: -111.66,
            country: String::from("USA"),
            city: String::from("Provo"),
        };
        Event::new(EventId::new(), owner, EventType::Birth, 2000, &provo)
    }

    #[test]
    fn create_persons_stores_batch() {
        let mut store = MemoryStore::new();
        let batch = vec![person("sillysally", "Sally"), person("sillysally", "Amy")];
        assert!(store.create_persons(&batch).is_ok());
        assert_eq!(store.person_count(), 2);
        assert_eq!(store.persons_for_user("sillysally").len(), 2);
    }

    #[test]
    fn duplicate_person_rejects_whole_batch() {
        let mut store = MemoryStore::new();
        let existing = person("sillysally", "Sally");
        assert!(store.create_persons(std::slice::from_ref(&existing)).is_ok());

        let batch = vec![person("sillysally", "Amy"), existing.clone()];
        let result = store.create_persons(&batch);
        assert_eq!(
            result,
            Err(StoreError::DuplicateIdentifier {
                entity: "person",
                id: existing.person_id.to_string(),
            })
        );
        assert_eq!(store.person_count(), 1);
    }

    #[test]
    fn repeated_id_within_batch_is_rejected() {
        let mut store = MemoryStore::new();
        let sally = person("sillysally", "Sally");
        let first = birth(&sally);
        let batch = vec![first.clone(), first];
        assert!(store.create_events(&batch).is_err());
        assert_eq!(store.event_count(), 0);
    }

    #[test]
    fn update_user_person_requires_existing_user() {
        let mut store = MemoryStore::new();
        let id = PersonId::new();
        assert_eq!(
            store.update_user_person("nobody", id),
            Err(StoreError::NotFound {
                entity: "user",
                key: String::from("nobody"),
            })
        );

        assert!(store.create_users(&[sally_user()]).is_ok());
        assert!(store.update_user_person("sillysally", id).is_ok());
        assert_eq!(store.user("sillysally").and_then(|u| u.person_id), Some(id));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut store = MemoryStore::new();
        assert!(store.create_users(&[sally_user()]).is_ok());
        assert!(store.create_users(&[sally_user()]).is_err());
    }

    #[test]
    fn clear_user_data_keeps_other_users() {
        let mut store = MemoryStore::new();
        assert!(store.create_users(&[sally_user()]).is_ok());

        let sally = person("sillysally", "Sally");
        let other = person("patrick", "Patrick");
        let events = vec![birth(&sally), birth(&other)];
        assert!(store.create_persons(&[sally.clone(), other]).is_ok());
        assert!(store.create_events(&events).is_ok());
        assert!(store.update_user_person("sillysally", sally.person_id).is_ok());

        assert_eq!(store.clear_user_data("sillysally"), Ok((1, 1)));
        assert_eq!(store.person_count(), 1);
        assert_eq!(store.event_count(), 1);
        assert!(store.user("sillysally").is_some_and(|u| u.person_id.is_none()));
        assert!(store.persons_for_user("patrick").len() == 1);
    }

    #[test]
    fn clear_user_data_unknown_user_fails() {
        let mut store = MemoryStore::new();
        assert!(store.clear_user_data("ghost").is_err());
    }
}
