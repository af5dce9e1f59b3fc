pub mod sim_resources;

pub use sim_resources::{
    ActionsRng, CareerRng, EducationRng, EventsRng, HealthRng, LifecycleRng, SimRng, WorldgenRng,
    YearLedger, distribute_rng,
};
pub(crate) use sim_resources::derive_domain_seed;
