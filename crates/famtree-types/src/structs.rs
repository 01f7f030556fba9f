//! Entity structs for family tree records.
//!
//! Field names on the wire follow the Family Map JSON format (`personID`,
//! `associatedUsername`, `fatherID`, ...), which is why most structs carry
//! explicit `serde` renames.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EventType, Gender};
use crate::ids::{EventId, PersonId};

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A single person in a user's family tree.
///
/// `father_id`, `mother_id` and `spouse_id` are `None` for ancestors at the
/// generation boundary and for a root person whose parents have not been
/// assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Person {
    /// Unique identifier of this person.
    #[serde(rename = "personID")]
    pub person_id: PersonId,
    /// Username of the account that owns this tree.
    pub associated_username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// The father's person ID, if known.
    #[serde(rename = "fatherID")]
    pub father_id: Option<PersonId>,
    /// The mother's person ID, if known.
    #[serde(rename = "motherID")]
    pub mother_id: Option<PersonId>,
    /// The spouse's person ID, if known.
    #[serde(rename = "spouseID")]
    pub spouse_id: Option<PersonId>,
}

impl Person {
    /// Create a person with no parent or spouse links.
    pub fn new(
        person_id: PersonId,
        associated_username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            person_id,
            associated_username: associated_username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            father_id: None,
            mother_id: None,
            spouse_id: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A geographic place where an event happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A dated, located life event belonging to one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique identifier of this event.
    #[serde(rename = "eventID")]
    pub event_id: EventId,
    /// Username of the account that owns this tree.
    pub associated_username: String,
    /// The person this event belongs to.
    #[serde(rename = "personID")]
    pub person_id: PersonId,
    /// Latitude of the event location.
    pub latitude: f64,
    /// Longitude of the event location.
    pub longitude: f64,
    /// Country of the event location.
    pub country: String,
    /// City of the event location.
    pub city: String,
    /// What kind of event this is.
    pub event_type: EventType,
    /// Calendar year of the event (always positive).
    pub year: u32,
}

impl Event {
    /// Create an event for `owner` at `location`.
    ///
    /// The owner's username is copied onto the event so that events and
    /// persons of one tree always share an `associated_username`.
    pub fn new(
        event_id: EventId,
        owner: &Person,
        event_type: EventType,
        year: u32,
        location: &Location,
    ) -> Self {
        Self {
            event_id,
            associated_username: owner.associated_username.clone(),
            person_id: owner.person_id,
            latitude: location.latitude,
            longitude: location.longitude,
            country: location.country.clone(),
            city: location.city.clone(),
            event_type,
            year,
        }
    }

    /// The location this event took place at.
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country.clone(),
            city: self.city.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered account.
///
/// `person_id` points at the root of the account's family tree and stays
/// `None` until a tree has been generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Unique account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Root person of this user's tree.
    #[serde(rename = "personID")]
    pub person_id: Option<PersonId>,
}

// ---------------------------------------------------------------------------
// RootIdentity
// ---------------------------------------------------------------------------

/// Who a generated tree is rooted at.
///
/// This is the only information the tree generator needs about the owning
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct RootIdentity {
    /// Owning account name; stamped on every generated record.
    pub username: String,
    /// The root person's given name.
    pub first_name: String,
    /// The root person's family name, inherited along the paternal line.
    pub last_name: String,
    /// The root person's gender.
    pub gender: Gender,
}

impl RootIdentity {
    /// Create an identity from its parts.
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
        }
    }
}

impl From<&User> for RootIdentity {
    fn from(user: &User) -> Self {
        Self::new(
            user.username.clone(),
            user.first_name.clone(),
            user.last_name.clone(),
            user.gender,
        )
    }
}
