//! Seeding binary for the family tree store.
//!
//! Registers a root user and fabricates their ancestry, then prints a JSON
//! summary of the run.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `famtree-config.yaml`
//! 3. Load reference names and locations
//! 4. Register the root user
//! 5. Generate and persist the tree
//! 6. Print the generation result

mod error;
mod seed;

use std::path::Path;

use famtree_generator::{FamtreeConfig, ReferenceContent, TreeGenerator};
use famtree_store::MemoryStore;
use famtree_types::RootIdentity;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::SeedError;

const CONFIG_PATH: &str = "famtree-config.yaml";

/// Application entry point for the seeder.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the tree cannot be
/// generated and stored.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("famtree-seed starting");
    run()?;
    Ok(())
}

/// Steps 2 through 6 of the startup sequence.
fn run() -> Result<(), SeedError> {
    // 2. Load configuration.
    let config = load_config()?;
    let seed = seed::load_seed_config(Path::new(CONFIG_PATH))?;
    info!(
        username = %seed.username,
        generations = ?seed.generations,
        rng_seed = ?seed.rng_seed,
        max_generations = config.generator.max_generations,
        "Configuration loaded"
    );

    // 3. Load reference data.
    let content = ReferenceContent::load(&config.reference_data);
    info!(
        first_names = content.first_name_count(),
        last_names = content.last_name_count(),
        locations = content.location_count(),
        "Reference content ready"
    );

    // 4. Register the root user.
    let mut store = MemoryStore::new();
    let user = seed.user();
    store.create_users(std::slice::from_ref(&user))?;
    info!(username = %user.username, "Root user registered");

    // 5. Generate the tree.
    let mut rng = match seed.rng_seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let identity = RootIdentity::from(&user);
    let ledger = TreeGenerator::new(&config.generator, &content, &mut store).try_generate(
        &identity,
        seed.generations,
        &mut rng,
    )?;

    // 6. Report.
    let summary = serde_json::to_string_pretty(&ledger.result()).map_err(|e| SeedError::Summary {
        message: format!("{e}"),
    })?;
    println!("{summary}");

    info!(
        stored_persons = store.persons_for_user(&user.username).len(),
        stored_events = store.events_for_user(&user.username).len(),
        "famtree-seed finished"
    );
    Ok(())
}

/// Load configuration from `famtree-config.yaml`, or defaults if the file
/// does not exist.
fn load_config() -> Result<FamtreeConfig, SeedError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = FamtreeConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        let mut config = FamtreeConfig::default();
        config.reference_data.apply_env_overrides();
        Ok(config)
    }
}
