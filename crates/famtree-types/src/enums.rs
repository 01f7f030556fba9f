//! Enumeration types for family tree records.
//!
//! Both enums serialize to the exact strings the Family Map wire format
//! uses (`"f"`/`"m"` and `"Birth"`/`"Death"`/`"Marriage"`).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// The recorded gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Gender {
    /// Serialized as `"f"`.
    #[serde(rename = "f")]
    Female,
    /// Serialized as `"m"`.
    #[serde(rename = "m")]
    Male,
}

impl Gender {
    /// The single-letter wire code for this gender.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Female => "f",
            Self::Male => "m",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not a recognised gender code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(pub String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid gender '{}': expected \"f\" or \"m\"", self.0)
    }
}

impl core::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" | "F" => Ok(Self::Female),
            "m" | "M" => Ok(Self::Male),
            other => Err(ParseGenderError(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// The kind of life event recorded for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventType {
    /// The person was born. Every generated person has exactly one.
    Birth,
    /// The person died. Every generated ancestor has exactly one; the
    /// root person (a living user) has none.
    Death,
    /// The person married. Recorded once per spouse with a shared year.
    Marriage,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Birth => "Birth",
            Self::Death => "Death",
            Self::Marriage => "Marriage",
        };
        f.write_str(name)
    }
}
