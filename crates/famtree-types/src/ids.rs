//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Persons and events each carry a strongly-typed ID so a person reference
//! can never be stored where an event reference is expected. IDs render as
//! hyphenated UUID strings on the wire.
//!
//! Generated trees draw their identifiers from the generation RNG (see
//! [`PersonId::from_random_bytes`]) so that a seeded run is reproducible.
//! The `new()` constructors use UUID v7 for records created outside a
//! generation run (e.g. tests, manual loads).

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Build a random (v4) identifier from caller-supplied bytes.
            ///
            /// Used with a seedable RNG so identifiers are reproducible.
            pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
                Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a person in a family tree.
    PersonId
}

define_id! {
    /// Unique identifier for a life event (birth, death, marriage).
    EventId
}
