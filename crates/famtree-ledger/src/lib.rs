//! Generation ledger and census checks for the family tree seeder.
//!
//! Every person and event fabricated during one tree generation is
//! deposited in a [`GenerationLedger`] before anything touches storage.
//! The ledger is a pure accumulator: it records, counts and reports, but
//! never decides anything about tree shape.
//!
//! # Modules
//!
//! - [`ledger`] -- The [`GenerationLedger`] and its [`GenerationResult`] summary.
//! - [`census`] -- Expected person/event counts for a full binary ancestry
//!   tree, and verification of a ledger against them.
//!
//! # Census
//!
//! A tree with `g` ancestor generations above the root holds
//!
//! ```text
//! persons = 2^(g+1) - 1
//! events  = 3 * persons - 2
//! ```
//!
//! (one Birth each, one Death per ancestor, two Marriage events per couple).
//!
//! # Usage
//!
//! ```
//! use famtree_ledger::{GenerationLedger, census::{self, CensusResult}};
//! use famtree_types::{Gender, Person, PersonId};
//!
//! let mut ledger = GenerationLedger::new();
//! ledger.record_person(Person::new(PersonId::new(), "sillysally", "Sally", "Black", Gender::Female));
//!
//! assert_eq!(ledger.person_count(), 1);
//! assert_eq!(census::expected_persons(0), Some(1));
//! assert!(matches!(census::verify_census(&ledger, 0), CensusResult::Mismatch(_)));
//! ```

pub mod census;
pub mod ledger;

// Re-export primary types at crate root.
pub use census::{CensusMismatch, CensusResult};
pub use ledger::{GenerationLedger, GenerationResult};
