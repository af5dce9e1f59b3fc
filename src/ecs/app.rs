use bevy_app::App;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::clock::SimClock;
use super::resources::{
    ActionsRng, CareerRng, EducationRng, EventsRng, HealthRng, LifecycleRng, SimRng, WorldgenRng,
    YearLedger, distribute_rng,
};
use super::schedule::{SimPhase, configure_sim_schedule};
use crate::registry::Registries;

/// Build a headless Bevy app with the simulation clock, registries, ledger,
/// and RNG resources.
///
/// Manual tick control (one tick = one year):
/// ```no_run
/// # use life_gen::ecs::{build_sim_app, SimTick};
/// let mut app = build_sim_app(42);
/// for _ in 0..10 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(seed: u64) -> App {
    build_sim_app_with_executor(seed, ExecutorKind::MultiThreaded)
}

/// Build a headless Bevy app with single-threaded executor for reproducible
/// determinism. Use this when exact RNG consumption order across ticks must
/// be identical across runs.
pub fn build_sim_app_deterministic(seed: u64) -> App {
    build_sim_app_with_executor(seed, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_sim_app_with_executor(seed: u64, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new());
    app.insert_resource(YearLedger::default());
    app.insert_resource(Registries::builtin());
    app.insert_resource(SimRng { seed });

    // Per-domain RNG resources (reseeded each tick by distribute_rng).
    // Worldgen and player actions both run before the first tick, so those
    // two get their derived seeds now.
    app.insert_resource(WorldgenRng(SmallRng::seed_from_u64(
        super::resources::derive_domain_seed(seed, "worldgen", 0),
    )));
    app.insert_resource(ActionsRng(SmallRng::seed_from_u64(
        super::resources::derive_domain_seed(seed, "actions", 0),
    )));
    app.init_resource::<LifecycleRng>();
    app.init_resource::<EducationRng>();
    app.init_resource::<CareerRng>();
    app.init_resource::<HealthRng>();
    app.init_resource::<EventsRng>();

    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(distribute_rng.in_set(SimPhase::PreUpdate));
    app.add_schedule(schedule);
    app
}
