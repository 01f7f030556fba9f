//! Random names and locations for fabricated persons and events.
//!
//! Reference datasets are JSON files shaped `{"data": [...]}`. A dataset
//! that cannot be used is replaced by a single placeholder entry, so
//! content lookup never fails.

use std::path::Path;

use famtree_types::Location;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ReferenceDataConfig;
use crate::error::ReferenceDataError;

/// Name used when a name dataset is unavailable.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Source of random content for fabricated records.
///
/// Implementations hold no randomness of their own. Every draw uses the
/// caller's RNG, so a seeded RNG reproduces the same content.
pub trait ContentProvider {
    /// A uniformly chosen location.
    fn random_location<R: Rng>(&self, rng: &mut R) -> Location;

    /// A uniformly chosen first name.
    fn random_first_name<R: Rng>(&self, rng: &mut R) -> String;

    /// A uniformly chosen surname.
    fn random_last_name<R: Rng>(&self, rng: &mut R) -> String;
}

/// On-disk dataset envelope.
#[derive(Debug, Deserialize)]
struct DataSet<T> {
    data: Vec<T>,
}

/// Content drawn from fixed reference collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceContent {
    first_names: Vec<String>,
    last_names: Vec<String>,
    locations: Vec<Location>,
}

impl ReferenceContent {
    /// Build from in-memory collections. Empty collections are replaced by
    /// their placeholder.
    pub fn from_sets(
        first_names: Vec<String>,
        last_names: Vec<String>,
        locations: Vec<Location>,
    ) -> Self {
        Self {
            first_names: non_empty_or(first_names, placeholder_name),
            last_names: non_empty_or(last_names, placeholder_name),
            locations: non_empty_or(locations, placeholder_location),
        }
    }

    /// Content made only of placeholders.
    pub fn placeholders() -> Self {
        Self::from_sets(Vec::new(), Vec::new(), Vec::new())
    }

    /// Load the three datasets named by `config`.
    ///
    /// A dataset that is missing, malformed or empty is logged and
    /// replaced by its placeholder.
    pub fn load(config: &ReferenceDataConfig) -> Self {
        let first_names = load_or_placeholder(&config.first_names_path(), "first_names");
        let last_names = load_or_placeholder(&config.last_names_path(), "last_names");
        let locations = load_or_placeholder(&config.locations_path(), "locations");

        tracing::debug!(
            first_names = first_names.len(),
            last_names = last_names.len(),
            locations = locations.len(),
            "Reference content loaded"
        );

        Self::from_sets(first_names, last_names, locations)
    }

    /// Number of first names available.
    pub const fn first_name_count(&self) -> usize {
        self.first_names.len()
    }

    /// Number of surnames available.
    pub const fn last_name_count(&self) -> usize {
        self.last_names.len()
    }

    /// Number of locations available.
    pub const fn location_count(&self) -> usize {
        self.locations.len()
    }
}

impl ContentProvider for ReferenceContent {
    fn random_location<R: Rng>(&self, rng: &mut R) -> Location {
        self.locations
            .choose(rng)
            .cloned()
            .unwrap_or_else(placeholder_location)
    }

    fn random_first_name<R: Rng>(&self, rng: &mut R) -> String {
        self.first_names
            .choose(rng)
            .cloned()
            .unwrap_or_else(placeholder_name)
    }

    fn random_last_name<R: Rng>(&self, rng: &mut R) -> String {
        self.last_names
            .choose(rng)
            .cloned()
            .unwrap_or_else(placeholder_name)
    }
}

/// The location used when the location dataset is unavailable.
pub fn placeholder_location() -> Location {
    Location {
        latitude: 0.0,
        longitude: 0.0,
        country: String::from(PLACEHOLDER_NAME),
        city: String::from(PLACEHOLDER_NAME),
    }
}

fn placeholder_name() -> String {
    String::from(PLACEHOLDER_NAME)
}

fn non_empty_or<T>(set: Vec<T>, placeholder: fn() -> T) -> Vec<T> {
    if set.is_empty() {
        vec![placeholder()]
    } else {
        set
    }
}

fn load_or_placeholder<T: DeserializeOwned>(path: &Path, dataset: &str) -> Vec<T> {
    match try_load_set(path) {
        Ok(set) => set,
        Err(err) => {
            tracing::warn!(dataset, error = %err, "Reference data unavailable, using placeholder");
            Vec::new()
        }
    }
}

/// Read one `{"data": [...]}` dataset.
///
/// # Errors
///
/// Returns a [`ReferenceDataError`] if the file cannot be read, does not
/// parse, or holds no entries.
pub fn try_load_set<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReferenceDataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ReferenceDataError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let set: DataSet<T> =
        serde_json::from_str(&contents).map_err(|e| ReferenceDataError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if set.data.is_empty() {
        return Err(ReferenceDataError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(set.data)
}
