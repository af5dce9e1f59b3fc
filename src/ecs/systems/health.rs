//! Yearly health drift by life stage, then the illness course for every
//! active condition.

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;

use crate::ecs::components::{HistoryLog, Illnesses, Player, Stats, Vitals};
use crate::ecs::resources::HealthRng;
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::{LifeStage, StatKind};
use crate::random::with_probability;
use crate::registry::Registries;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HAPPINESS_BONUS_DIVISOR: i32 = 25;
const CRITICAL_HEALTH_THRESHOLD: i32 = 35;

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (drift_health, tick_illnesses)
                .chain()
                .in_set(DomainSet::Health),
        );
    }
}

fn drift_health(mut players: Query<(&Vitals, &mut Stats), With<Player>>) {
    for (vitals, mut stats) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        apply_health_drift(vitals.age, &mut stats);
    }
}

fn tick_illnesses(
    registries: Res<Registries>,
    mut rng: ResMut<HealthRng>,
    mut players: Query<(&Vitals, &mut Stats, &mut Illnesses, &mut HistoryLog), With<Player>>,
) {
    for (vitals, mut stats, mut illnesses, mut log) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        run_illness_year(
            vitals.age,
            &mut stats,
            &mut illnesses,
            &registries,
            &mut rng.0,
            &mut log,
        );
    }
}

/// Baseline drift: growing children gain a point a year, elders lose three,
/// everyone else loses one. High happiness buys back a little.
pub(crate) fn apply_health_drift(age: u32, stats: &mut Stats) {
    let drift = match LifeStage::from_age(age) {
        LifeStage::Toddler | LifeStage::Child => 1,
        LifeStage::Elder => -3,
        _ => -1,
    };
    stats.modify(StatKind::Health, drift);

    let bonus = (stats.happiness - 50) / HAPPINESS_BONUS_DIVISOR;
    if bonus > 0 {
        stats.modify(StatKind::Health, bonus);
    }
}

/// One year on each active illness: drain first, then a death roll that only
/// matters once health is already critical, then a recovery roll.
pub(crate) fn run_illness_year(
    age: u32,
    stats: &mut Stats,
    illnesses: &mut Illnesses,
    registries: &Registries,
    rng: &mut impl Rng,
    log: &mut HistoryLog,
) {
    let active: Vec<String> = illnesses.0.clone();
    for id in active {
        let Some(def) = registries.illness(&id) else {
            continue;
        };
        stats.modify(StatKind::Health, -def.health_drain_per_year);

        // The roll is consumed even when health is still above the threshold.
        if with_probability(rng, def.chance_of_death) && stats.health < CRITICAL_HEALTH_THRESHOLD {
            stats.health = 0;
            log.push(
                format!("My {} worsened critically.", def.name),
                age,
                &["health"],
            );
            continue;
        }
        if with_probability(rng, def.chance_to_recover) {
            illnesses.remove(&id);
            log.push(format!("I recovered from {}.", def.name), age, &["health"]);
        }
    }
}
