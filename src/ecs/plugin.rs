//! Aggregate plugin wiring every yearly domain into the tick schedule.

use bevy_app::{App, Plugin};

use super::systems::career::CareerPlugin;
use super::systems::death::DeathPlugin;
use super::systems::education::EducationPlugin;
use super::systems::events::EventsPlugin;
use super::systems::expenses::ExpensesPlugin;
use super::systems::health::HealthPlugin;
use super::systems::lifecycle::LifecyclePlugin;
use super::systems::relationships::RelationshipsPlugin;

/// The full yearly pipeline. Add to an app built by
/// [`build_sim_app`](super::build_sim_app); the schedule's domain sets keep
/// the systems in lifecycle-to-death order.
pub struct LifeSimPlugin;

impl Plugin for LifeSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            LifecyclePlugin,
            EducationPlugin,
            CareerPlugin,
            ExpensesPlugin,
            HealthPlugin,
            RelationshipsPlugin,
            EventsPlugin,
            DeathPlugin,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app_deterministic;
    use crate::ecs::components::{HistoryLog, Stats, Vitals};
    use crate::ecs::test_helpers::{spawn_test_player, tick_years};

    fn full_app(seed: u64) -> bevy_app::App {
        let mut app = build_sim_app_deterministic(seed);
        app.add_plugins(LifeSimPlugin);
        app
    }

    #[test]
    fn ten_years_of_childhood_run_cleanly() {
        let mut app = full_app(7);
        let player = spawn_test_player(&mut app);

        tick_years(&mut app, 10);

        let vitals = app.world().get::<Vitals>(player).unwrap();
        assert!(vitals.alive);
        assert_eq!(vitals.age, 10);
        let log = app.world().get::<HistoryLog>(player).unwrap();
        assert!(log.contains("I turned 10."));
        assert!(log.contains("I started elementary school."));
    }

    #[test]
    fn same_seed_produces_identical_histories() {
        let run = |seed: u64| {
            let mut app = full_app(seed);
            let player = spawn_test_player(&mut app);
            tick_years(&mut app, 30);
            let texts: Vec<String> = app
                .world()
                .get::<HistoryLog>(player)
                .unwrap()
                .entries
                .iter()
                .map(|e| e.text.clone())
                .collect();
            let stats = app.world().get::<Stats>(player).unwrap().clone();
            (texts, stats)
        };

        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn different_seeds_diverge() {
        let run = |seed: u64| {
            let mut app = full_app(seed);
            let player = spawn_test_player(&mut app);
            tick_years(&mut app, 30);
            app.world()
                .get::<HistoryLog>(player)
                .unwrap()
                .entries
                .iter()
                .map(|e| e.text.clone())
                .collect::<Vec<_>>()
        };

        assert_ne!(run(1), run(2));
    }
}
