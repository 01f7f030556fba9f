//! The root account a seeding run fabricates a tree for.

use std::path::Path;

use famtree_types::{Gender, User};
use serde::Deserialize;

use crate::error::SeedError;

/// Configuration for a seeding run, loaded from the `seed` section of
/// `famtree-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Fixed RNG seed for a reproducible tree. `None` seeds from the OS.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Account name of the root user.
    #[serde(default = "default_username")]
    pub username: String,

    /// Password of the root user.
    #[serde(default = "default_password")]
    pub password: String,

    /// Email of the root user.
    #[serde(default = "default_email")]
    pub email: String,

    /// Given name of the root person.
    #[serde(default = "default_first_name")]
    pub first_name: String,

    /// Family name of the root person.
    #[serde(default = "default_last_name")]
    pub last_name: String,

    /// Gender of the root person (`f` or `m`).
    #[serde(default = "default_gender")]
    pub gender: Gender,

    /// Ancestor generations to fabricate. Absent or negative means the
    /// generator default.
    #[serde(default)]
    pub generations: Option<i64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            username: default_username(),
            password: default_password(),
            email: default_email(),
            first_name: default_first_name(),
            last_name: default_last_name(),
            gender: default_gender(),
            generations: None,
        }
    }
}

impl SeedConfig {
    /// The account to register for this run.
    pub fn user(&self) -> User {
        User {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender,
            person_id: None,
        }
    }

    /// Apply environment overrides.
    ///
    /// - `FAMTREE_RNG_SEED` overrides `rng_seed`
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::SeedConfig`] if the variable is set but is not
    /// an unsigned integer.
    pub fn apply_env_overrides(&mut self) -> Result<(), SeedError> {
        if let Ok(val) = std::env::var("FAMTREE_RNG_SEED") {
            let seed = val.trim().parse::<u64>().map_err(|e| SeedError::SeedConfig {
                message: format!("FAMTREE_RNG_SEED must be an unsigned integer: {e}"),
            })?;
            self.rng_seed = Some(seed);
        }
        Ok(())
    }
}

/// Parse the `seed` section out of a full configuration document.
///
/// A document without a `seed` key yields the defaults.
///
/// # Errors
///
/// Returns [`SeedError::SeedConfig`] if the document or the section does
/// not parse.
pub fn parse_seed_config(yaml: &str) -> Result<SeedConfig, SeedError> {
    // Parse the full YAML and extract just the "seed" section.
    let raw: serde_yml::Value = serde_yml::from_str(yaml).map_err(|e| SeedError::SeedConfig {
        message: format!("failed to parse config YAML: {e}"),
    })?;

    raw.get("seed").map_or_else(
        || Ok(SeedConfig::default()),
        |value| {
            serde_yml::from_value(value.clone()).map_err(|e| SeedError::SeedConfig {
                message: format!("failed to parse seed config: {e}"),
            })
        },
    )
}

/// Load the seed configuration from `path`, falling back to defaults if
/// the file does not exist, then apply environment overrides.
///
/// # Errors
///
/// Returns [`SeedError::SeedConfig`] if the file cannot be read or parsed,
/// or an override is malformed.
pub fn load_seed_config(path: &Path) -> Result<SeedConfig, SeedError> {
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| SeedError::SeedConfig {
            message: format!("failed to read config file: {e}"),
        })?;
        parse_seed_config(&contents)?
    } else {
        SeedConfig::default()
    };
    config.apply_env_overrides()?;
    Ok(config)
}

fn default_username() -> String {
    String::from("sillysally")
}

fn default_password() -> String {
    String::from("password")
}

fn default_email() -> String {
    String::from("sally@email.test")
}

fn default_first_name() -> String {
    String::from("Sally")
}

fn default_last_name() -> String {
    String::from("Black")
}

const fn default_gender() -> Gender {
    Gender::Female
}
