use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Master seed for the simulation. Every per-domain RNG is derived from it
/// each tick by `distribute_rng`.
#[derive(Resource)]
pub struct SimRng {
    pub seed: u64,
}

// ---------------------------------------------------------------------------
// Per-domain RNG resources
// ---------------------------------------------------------------------------

macro_rules! domain_rng {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Resource)]
        pub struct $name(pub SmallRng);

        impl Default for $name {
            fn default() -> Self {
                Self(SmallRng::seed_from_u64(0))
            }
        }
    };
}

domain_rng!(WorldgenRng, "Per-domain RNG for world generation.");
domain_rng!(LifecycleRng, "Per-domain RNG for lifecycle and death systems.");
domain_rng!(EducationRng, "Per-domain RNG for education systems.");
domain_rng!(CareerRng, "Per-domain RNG for career systems.");
domain_rng!(HealthRng, "Per-domain RNG for health and illness systems.");
domain_rng!(EventsRng, "Per-domain RNG for the yearly event engine.");
domain_rng!(ActionsRng, "Per-domain RNG for player actions.");

/// Derive a deterministic per-domain seed from the global seed, domain name, and tick count.
pub(crate) fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system that re-seeds all per-domain RNGs each tick.
/// Runs in `SimPhase::PreUpdate` before any domain systems.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let tick = world.resource::<crate::ecs::clock::SimClock>().tick_count;

    macro_rules! reseed {
        ($res:ty, $label:expr) => {
            world.resource_mut::<$res>().0 =
                SmallRng::seed_from_u64(derive_domain_seed(seed, $label, tick));
        };
    }

    reseed!(WorldgenRng, "worldgen");
    reseed!(LifecycleRng, "lifecycle");
    reseed!(EducationRng, "education");
    reseed!(CareerRng, "career");
    reseed!(HealthRng, "health");
    reseed!(EventsRng, "events");
    reseed!(ActionsRng, "actions");
}

// ---------------------------------------------------------------------------
// Yearly ledger
// ---------------------------------------------------------------------------

/// Per-year bookkeeping reset at the start of each advance. After a tick it
/// holds the most recent year's summary lines and money flow.
#[derive(Resource, Debug, Clone, Default)]
pub struct YearLedger {
    pub summary: Vec<String>,
    pub last_income: f64,
    pub last_expenses: f64,
    /// Count of discrete activities performed since the year began.
    pub year_actions: u32,
}

impl YearLedger {
    pub fn reset(&mut self) {
        self.summary.clear();
        self.last_income = 0.0;
        self.last_expenses = 0.0;
        self.year_actions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_seeds_differ_by_domain_and_tick() {
        let a = derive_domain_seed(42, "career", 1);
        let b = derive_domain_seed(42, "health", 1);
        let c = derive_domain_seed(42, "career", 2);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, derive_domain_seed(42, "career", 1));
    }

    #[test]
    fn ledger_reset_clears_everything() {
        let mut ledger = YearLedger {
            summary: vec!["x".into()],
            last_income: 10.0,
            last_expenses: 5.0,
            year_actions: 3,
        };
        ledger.reset();
        assert!(ledger.summary.is_empty());
        assert_eq!(ledger.last_income, 0.0);
        assert_eq!(ledger.last_expenses, 0.0);
        assert_eq!(ledger.year_actions, 0);
    }
}
