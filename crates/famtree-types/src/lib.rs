//! Shared type definitions for the family tree seeder.
//!
//! Every crate in the workspace speaks in these types. They serialize to
//! the Family Map JSON wire format and flow to `TypeScript` via `ts-rs`
//! for the client application.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for persons and events
//! - [`enums`] -- [`Gender`] and [`EventType`]
//! - [`structs`] -- [`Person`], [`Event`], [`User`], [`Location`], [`RootIdentity`]

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EventType, Gender, ParseGenderError};
pub use ids::{EventId, PersonId};
pub use structs::{Event, Location, Person, RootIdentity, User};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PersonId::export_all();
        let _ = crate::ids::EventId::export_all();

        let _ = crate::enums::Gender::export_all();
        let _ = crate::enums::EventType::export_all();

        let _ = crate::structs::Person::export_all();
        let _ = crate::structs::Location::export_all();
        let _ = crate::structs::Event::export_all();
        let _ = crate::structs::User::export_all();
        let _ = crate::structs::RootIdentity::export_all();
    }
}
