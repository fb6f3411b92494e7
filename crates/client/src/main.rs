//! Fight simulation binary.
//!
//! Plays a seeded run of levels with env-configured teams and reports how
//! each decision was reached.
//!
//! ```bash
//! AGENT_ENGINE_QUANTITY=60 AGENT_RANDOM_QUANTITY=40 SIM_LEVELS=10 \
//!     cargo run -p fight-client --bin fight-sim
//! ```

use std::sync::Arc;

use anyhow::Result;
use fight_client::{Arena, SimConfig, Strategy, logging, roster};
use fight_runtime::{EngineFightProvider, RandomFightProvider, RuntimeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Setup logging, so configuration warnings are visible
    logging::setup_logging()?;

    // 2. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env()?;
    let sim_config = SimConfig::from_env();

    tracing::info!("Starting fight simulation");
    tracing::info!("Levels: {}, seed: {}", sim_config.levels, sim_config.seed);
    tracing::info!("Parallel evaluation: {}", runtime_config.engine.parallel);

    // 3. Build providers
    let engine = EngineFightProvider::new(runtime_config.build_engine()?);
    let metrics = Arc::clone(engine.metrics());
    let random = RandomFightProvider::seeded(sim_config.seed.wrapping_add(1));

    // 4. Generate roster and play
    let mut rng = StdRng::seed_from_u64(sim_config.seed);
    let members = roster::generate(&sim_config, &mut rng);
    tracing::info!("Roster: {} agents", members.len());

    let mut arena = Arena::new(members, rng)
        .with_provider(Strategy::Engine, Arc::new(engine))
        .with_provider(Strategy::Random, Arc::new(random));

    let outcomes = arena.run(sim_config.levels).await?;

    let cleared = outcomes.iter().filter(|o| o.victory).count();
    tracing::info!(
        "Cleared {}/{} levels with {} survivors",
        cleared,
        sim_config.levels,
        arena.survivors().len()
    );
    tracing::info!("Engine decisions: {:?}", metrics.snapshot());

    Ok(())
}
