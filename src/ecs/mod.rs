pub mod actions;
pub mod app;
pub mod clock;
pub mod components;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_sim_app, build_sim_app_deterministic, build_sim_app_with_executor};
pub use plugin::LifeSimPlugin;
pub use schedule::{DomainSet, SimPhase, SimTick};
