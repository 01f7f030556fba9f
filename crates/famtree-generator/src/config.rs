//! Configuration loading and typed config structures for tree generation.
//!
//! The canonical configuration lives in `famtree-config.yaml` at the
//! project root. Every field has a default, so an empty file (or no file)
//! yields a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config: {message}")]
    Invalid {
        /// Description of the offending value.
        message: String,
    },
}

/// Deepest tree any configuration may request.
///
/// A tree of this depth holds 131 071 persons and 393 211 events.
pub const GENERATION_LIMIT: u32 = 16;

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the `generator` and `reference_data` sections of
/// `famtree-config.yaml`. Other sections are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FamtreeConfig {
    /// Tree shape and date bounds.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Where the name and location datasets live.
    #[serde(default)]
    pub reference_data: ReferenceDataConfig,
}

impl FamtreeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FAMTREE_REFERENCE_DIR` overrides `reference_data.directory`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if the generator section is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.generator.validate()?;
        config.reference_data.apply_env_overrides();
        Ok(config)
    }
}

/// Tree generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Ancestor generations used when the caller gives none (or a negative
    /// count).
    #[serde(default = "default_generations")]
    pub default_generations: u32,

    /// Largest accepted generation count.
    #[serde(default = "default_max_generations")]
    pub max_generations: u32,

    /// Birth-year bounds for the root person.
    #[serde(default)]
    pub root_birth_years: YearBounds,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_generations: default_generations(),
            max_generations: default_max_generations(),
            root_birth_years: YearBounds::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check the generation counts against each other and
    /// [`GENERATION_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `max_generations` exceeds the
    /// limit or `default_generations` exceeds `max_generations`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_generations > GENERATION_LIMIT {
            return Err(ConfigError::Invalid {
                message: format!(
                    "max_generations {} exceeds the limit of {GENERATION_LIMIT}",
                    self.max_generations
                ),
            });
        }
        if self.default_generations > self.max_generations {
            return Err(ConfigError::Invalid {
                message: format!(
                    "default_generations {} exceeds max_generations {}",
                    self.default_generations, self.max_generations
                ),
            });
        }
        Ok(())
    }

    /// The largest generation count actually accepted.
    pub fn effective_max_generations(&self) -> u32 {
        self.max_generations.min(GENERATION_LIMIT)
    }
}

/// Inclusive bounds on a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct YearBounds {
    /// Earliest allowed year.
    #[serde(default = "default_earliest_root_birth")]
    pub earliest: u32,
    /// Latest allowed year.
    #[serde(default = "default_latest_root_birth")]
    pub latest: u32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            earliest: default_earliest_root_birth(),
            latest: default_latest_root_birth(),
        }
    }
}

/// Reference dataset locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceDataConfig {
    /// Directory holding the dataset files.
    #[serde(default = "default_reference_dir")]
    pub directory: PathBuf,
    /// First-name dataset file name.
    #[serde(default = "default_first_names_file")]
    pub first_names_file: String,
    /// Surname dataset file name.
    #[serde(default = "default_last_names_file")]
    pub last_names_file: String,
    /// Location dataset file name.
    #[serde(default = "default_locations_file")]
    pub locations_file: String,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            directory: default_reference_dir(),
            first_names_file: default_first_names_file(),
            last_names_file: default_last_names_file(),
            locations_file: default_locations_file(),
        }
    }
}

impl ReferenceDataConfig {
    /// Apply environment overrides.
    ///
    /// - `FAMTREE_REFERENCE_DIR` overrides `directory`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FAMTREE_REFERENCE_DIR") {
            self.directory = PathBuf::from(val);
        }
    }

    /// Full path of the first-name dataset.
    pub fn first_names_path(&self) -> PathBuf {
        self.directory.join(&self.first_names_file)
    }

    /// Full path of the surname dataset.
    pub fn last_names_path(&self) -> PathBuf {
        self.directory.join(&self.last_names_file)
    }

    /// Full path of the location dataset.
    pub fn locations_path(&self) -> PathBuf {
        self.directory.join(&self.locations_file)
    }
}

const fn default_generations() -> u32 {
    4
}

const fn default_max_generations() -> u32 {
    12
}

const fn default_earliest_root_birth() -> u32 {
    1984
}

const fn default_latest_root_birth() -> u32 {
    2008
}

fn default_reference_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_first_names_file() -> String {
    String::from("fnames.json")
}

fn default_last_names_file() -> String {
    String::from("snames.json")
}

fn default_locations_file() -> String {
    String::from("locations.json")
}
