//! Start-of-year bookkeeping: ledger reset, birthday, birthday log line.

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, ResMut};

use crate::ecs::components::{HistoryLog, Player, Vitals};
use crate::ecs::resources::YearLedger;
use crate::ecs::schedule::{DomainSet, SimTick};

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, begin_year.in_set(DomainSet::Lifecycle));
    }
}

/// Runs first in the yearly pipeline. Everything downstream sees the
/// already-incremented age.
fn begin_year(
    mut ledger: ResMut<YearLedger>,
    mut players: Query<(&mut Vitals, &mut HistoryLog), With<Player>>,
) {
    for (mut vitals, mut log) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        ledger.reset();
        vitals.age += 1;
        let age = vitals.age;
        log.push(format!("I turned {age}."), age, &["age"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::test_helpers::{spawn_test_player, tick_years};

    #[test]
    fn birthday_increments_age_and_logs() {
        let mut app = build_sim_app(1);
        app.add_plugins(LifecyclePlugin);
        let player = spawn_test_player(&mut app);

        tick_years(&mut app, 1);

        let vitals = app.world().get::<Vitals>(player).unwrap();
        assert_eq!(vitals.age, 1);
        let log = app.world().get::<HistoryLog>(player).unwrap();
        assert_eq!(log.latest().map(|e| e.text.as_str()), Some("I turned 1."));
    }

    #[test]
    fn ledger_resets_each_year() {
        let mut app = build_sim_app(1);
        app.add_plugins(LifecyclePlugin);
        spawn_test_player(&mut app);

        app.world_mut().resource_mut::<YearLedger>().year_actions = 7;
        tick_years(&mut app, 1);

        assert_eq!(app.world().resource::<YearLedger>().year_actions, 0);
    }

    #[test]
    fn dead_player_does_not_age() {
        let mut app = build_sim_app(1);
        app.add_plugins(LifecyclePlugin);
        let player = spawn_test_player(&mut app);
        app.world_mut().get_mut::<Vitals>(player).unwrap().alive = false;

        tick_years(&mut app, 3);

        assert_eq!(app.world().get::<Vitals>(player).unwrap().age, 0);
    }
}
