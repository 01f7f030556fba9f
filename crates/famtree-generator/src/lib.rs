//! Synthetic ancestry generation for the family tree seeder.
//!
//! Given a root identity and a generation count, [`TreeGenerator`]
//! fabricates a full binary ancestry tree: every ancestor gets a name, a
//! Birth event, a Death event, and a Marriage event shared with their
//! spouse. Years are chosen so that parents are 13 to 50 years older than
//! their child, nobody outlives 120 years, parents survive until their
//! child is born, and couples marry after both turn 13 and before either
//! dies.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration (`famtree-config.yaml`).
//! - [`constraints`] -- Year ranges and the per-person [`ConstraintNode`].
//! - [`content`] -- Random names and locations ([`ContentProvider`]).
//! - [`generator`] -- The recursive [`TreeGenerator`].
//! - [`error`] -- Error types.
//!
//! # Usage
//!
//! ```
//! use famtree_generator::{GeneratorConfig, ReferenceContent, TreeGenerator};
//! use famtree_store::MemoryStore;
//! use famtree_types::{Gender, RootIdentity};
//! use rand::SeedableRng;
//!
//! let config = GeneratorConfig::default();
//! let content = ReferenceContent::placeholders();
//! let mut store = MemoryStore::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let identity = RootIdentity::new("sillysally", "Sally", "Black", Gender::Female);
//! let generator = TreeGenerator::new(&config, &content, &mut store);
//! let preview = generator.fabricate(&identity, Some(2), &mut rng);
//!
//! assert_eq!(preview.map(|ledger| ledger.person_count()).ok(), Some(7));
//! ```

pub mod config;
pub mod constraints;
pub mod content;
pub mod error;
pub mod generator;

// Re-export primary types at crate root for convenience.
pub use config::{
    ConfigError, FamtreeConfig, GENERATION_LIMIT, GeneratorConfig, ReferenceDataConfig, YearBounds,
};
pub use constraints::{ConstraintNode, YearRange};
pub use content::{ContentProvider, ReferenceContent};
pub use error::{ConstraintError, GenerationError, ReferenceDataError};
pub use generator::TreeGenerator;
