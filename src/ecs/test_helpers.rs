use bevy_app::App;
use bevy_ecs::entity::Entity;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{
    CareerState, EducationState, HistoryLog, Identity, Illnesses, OwnedAssets, Relationships,
    Stats, Vitals, Wallet,
};
use crate::ecs::schedule::SimTick;
use crate::ecs::spawn::{PlayerBundleData, spawn_player};

/// Run `n` yearly ticks.
pub fn tick_years(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Return the current simulation year from the clock resource.
pub fn current_year(app: &App) -> u32 {
    app.world().resource::<SimClock>().year
}

/// Spawn a newborn player with fixed mid-range stats and an empty history.
/// Tests adjust individual components afterward as needed.
pub fn spawn_test_player(app: &mut App) -> Entity {
    spawn_player(
        app.world_mut(),
        PlayerBundleData {
            identity: Identity {
                name: "Test Subject".to_string(),
                gender: "non-binary".to_string(),
                location: "Oslo, Norway".to_string(),
            },
            vitals: Vitals::newborn(),
            stats: Stats {
                health: 80,
                happiness: 70,
                smarts: 60,
                looks: 60,
                comedy: 55,
            },
            wallet: Wallet::new(1_000.0),
            education: EducationState::default(),
            career: CareerState::default(),
            relationships: Relationships::default(),
            illnesses: Illnesses::default(),
            assets: OwnedAssets::default(),
            history: HistoryLog::default(),
        },
    )
}
