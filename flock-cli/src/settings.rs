use anyhow::{Context, Result};
use flock_core::World;
use flock_shared::SimulationSettings;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

/// Read settings from a JSON file, or the defaults when no file is given
pub fn load_settings(path: Option<&Path>) -> Result<SimulationSettings> {
    let Some(path) = path else {
        return Ok(SimulationSettings::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    SimulationSettings::from_json(&json)
        .with_context(|| format!("Invalid settings in {}", path.display()))
}

/// Place agents at random as described by `settings`
pub fn build_world(settings: &SimulationSettings) -> Result<World> {
    let config = settings
        .steering_config()
        .context("Invalid steering settings")?;
    let spawn = settings.spawn_config().context("Invalid spawn settings")?;

    let mut rng = match settings.seed {
        Some(seed) => {
            log::debug!("Seeding initial placement with {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    World::new_with_config(
        settings.width,
        settings.height,
        settings.agent_count,
        config,
        spawn,
        &mut rng,
    )
    .context("Failed to create world")
}
