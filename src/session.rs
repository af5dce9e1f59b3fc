//! High-level session facade over the headless simulation app.
//!
//! Owns the app and the player entity, exposes one-call-per-year advancement,
//! discrete actions, and snapshot save/restore.

use bevy_app::App;
use bevy_ecs::entity::Entity;

use crate::ecs::actions::process_action;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{HistoryLog, Stats, Vitals, Wallet};
use crate::ecs::resources::YearLedger;
use crate::ecs::schedule::SimTick;
use crate::ecs::spawn::{PlayerBundleData, spawn_npc, spawn_player};
use crate::ecs::{LifeSimPlugin, build_sim_app_deterministic};
use crate::model::{ActionKind, ActionResult, Gesture};
use crate::registry::Registries;
use crate::snapshot::{SimSnapshot, SnapshotError};
use crate::worldgen::populate_world;

const DECEASED_SUMMARY: &str = "You have passed away. Start a new life.";

/// What one yearly advance produced.
#[derive(Debug, Clone, PartialEq)]
pub struct YearReport {
    pub summary: Vec<String>,
    pub income: f64,
    pub expenses: f64,
}

/// A running life simulation: one player, their family, and the yearly
/// pipeline, all behind a deterministic seed.
pub struct LifeSim {
    app: App,
    player: Entity,
    seed: u64,
}

impl LifeSim {
    /// Start a fresh life with a generated player and family.
    pub fn new(seed: u64) -> Self {
        let mut app = build_sim_app_deterministic(seed);
        app.add_plugins(LifeSimPlugin);
        let player = populate_world(app.world_mut());
        Self { app, player, seed }
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn year(&self) -> u32 {
        self.app.world().resource::<SimClock>().year
    }

    pub fn is_alive(&self) -> bool {
        self.app
            .world()
            .get::<Vitals>(self.player)
            .is_some_and(|v| v.alive)
    }

    pub fn age(&self) -> u32 {
        self.app
            .world()
            .get::<Vitals>(self.player)
            .map_or(0, |v| v.age)
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.app.world().get::<Stats>(self.player)
    }

    pub fn balance(&self) -> f64 {
        self.app
            .world()
            .get::<Wallet>(self.player)
            .map_or(0.0, |w| w.balance)
    }

    pub fn history(&self) -> Option<&HistoryLog> {
        self.app.world().get::<HistoryLog>(self.player)
    }

    /// Run one in-game year. A deceased player makes this a no-op with a
    /// fixed farewell summary.
    pub fn advance_year(&mut self) -> YearReport {
        if !self.is_alive() {
            return YearReport {
                summary: vec![DECEASED_SUMMARY.to_string()],
                income: 0.0,
                expenses: 0.0,
            };
        }
        self.app.world_mut().run_schedule(SimTick);
        let ledger = self.app.world().resource::<YearLedger>();
        YearReport {
            summary: ledger.summary.clone(),
            income: ledger.last_income,
            expenses: ledger.last_expenses,
        }
    }

    /// Apply one discrete action between yearly advances.
    pub fn act(&mut self, kind: ActionKind) -> ActionResult {
        process_action(self.app.world_mut(), kind)
    }

    pub fn perform_activity(&mut self, activity: &str) -> ActionResult {
        self.act(ActionKind::PerformActivity {
            activity: activity.to_string(),
        })
    }

    pub fn buy_asset(&mut self, asset_id: &str) -> ActionResult {
        self.act(ActionKind::BuyAsset {
            asset_id: asset_id.to_string(),
        })
    }

    pub fn apply_for_job(&mut self, job_id: &str) -> ActionResult {
        self.act(ActionKind::ApplyForJob {
            job_id: job_id.to_string(),
        })
    }

    pub fn apply_to_college(&mut self, college_id: &str) -> ActionResult {
        self.act(ActionKind::ApplyToCollege {
            college_id: college_id.to_string(),
        })
    }

    pub fn relationship_gesture(&mut self, npc_id: &str, gesture: Gesture) -> ActionResult {
        self.act(ActionKind::Relationship {
            npc_id: npc_id.to_string(),
            gesture,
        })
    }

    /// Discard this life and generate a fresh one under a new seed.
    pub fn new_life(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Capture the whole session for persistence.
    pub fn snapshot(&mut self) -> Result<SimSnapshot, SnapshotError> {
        let seed = self.seed;
        let year = self.year();
        let player = self.player;
        SimSnapshot::capture(self.app.world_mut(), player, seed, year)
    }

    /// Rebuild a session from a snapshot. Unknown registry ids are kept but
    /// warned about; they resolve to nothing at runtime.
    pub fn from_snapshot(snapshot: SimSnapshot) -> Self {
        let mut app = build_sim_app_deterministic(snapshot.seed);
        app.add_plugins(LifeSimPlugin);

        snapshot.warn_dangling_ids(app.world().resource::<Registries>());
        app.insert_resource(SimClock::at_year(snapshot.year));
        app.insert_resource(YearLedger {
            summary: snapshot.summary.clone(),
            last_income: snapshot.last_income,
            last_expenses: snapshot.last_expenses,
            year_actions: snapshot.year_actions,
        });

        for profile in snapshot.npcs.clone() {
            spawn_npc(app.world_mut(), profile);
        }
        let player = spawn_player(
            app.world_mut(),
            PlayerBundleData {
                identity: snapshot.identity,
                vitals: snapshot.vitals,
                stats: snapshot.stats,
                wallet: snapshot.wallet,
                education: snapshot.education,
                career: snapshot.career,
                relationships: snapshot.relationships,
                illnesses: snapshot.illnesses,
                assets: snapshot.assets,
                history: snapshot.history,
            },
        );
        Self {
            app,
            player,
            seed: snapshot.seed,
        }
    }
}

impl LifeSim {
    /// Direct world access for integration tests and embedding callers.
    pub fn world(&self) -> &bevy_ecs::world::World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut bevy_ecs::world::World {
        self.app.world_mut()
    }
}
