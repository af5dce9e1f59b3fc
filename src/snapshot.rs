//! Whole-session snapshots: capture the player, family, and ledger into a
//! serializable aggregate, write it as JSON, and rebuild a world from it.
//!
//! Runtime state refers to registry entries by id. A snapshot taken against
//! an older catalog may carry ids with no current definition; those are kept
//! and simply never resolve, with a warning at restore time.

use std::fmt;
use std::fs;
use std::path::Path;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ecs::components::{
    CareerState, EducationState, HistoryLog, Identity, Illnesses, NpcProfile, OwnedAssets,
    Relationships, Stats, Vitals, Wallet,
};
use crate::ecs::resources::YearLedger;
use crate::registry::Registries;

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The world holds no complete player entity to capture.
    MissingPlayer,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "snapshot io error: {e}"),
            Self::Json(e) => write!(f, "snapshot serialization error: {e}"),
            Self::MissingPlayer => write!(f, "no player entity to snapshot"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::MissingPlayer => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Everything needed to resume a session: seed, clock year, the player's
/// components, the NPC roster, and the last year's ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub seed: u64,
    pub year: u32,
    pub identity: Identity,
    pub vitals: Vitals,
    pub stats: Stats,
    pub wallet: Wallet,
    pub education: EducationState,
    pub career: CareerState,
    pub relationships: Relationships,
    pub illnesses: Illnesses,
    pub assets: OwnedAssets,
    pub history: HistoryLog,
    pub npcs: Vec<NpcProfile>,
    pub summary: Vec<String>,
    pub last_income: f64,
    pub last_expenses: f64,
    pub year_actions: u32,
}

impl SimSnapshot {
    /// Capture the current session state. Fails if any player component is
    /// missing.
    pub fn capture(world: &mut World, player: Entity, seed: u64, year: u32) -> Result<Self, SnapshotError> {
        fn component<T: Clone + bevy_ecs::component::Component>(
            world: &World,
            player: Entity,
        ) -> Result<T, SnapshotError> {
            world
                .get::<T>(player)
                .cloned()
                .ok_or(SnapshotError::MissingPlayer)
        }

        let mut npc_query = world.query::<&NpcProfile>();
        let npcs = npc_query.iter(world).cloned().collect();
        let ledger = world.resource::<YearLedger>().clone();

        Ok(Self {
            seed,
            year,
            identity: component(world, player)?,
            vitals: component(world, player)?,
            stats: component(world, player)?,
            wallet: component(world, player)?,
            education: component(world, player)?,
            career: component(world, player)?,
            relationships: component(world, player)?,
            illnesses: component(world, player)?,
            assets: component(world, player)?,
            history: component(world, player)?,
            npcs,
            summary: ledger.summary,
            last_income: ledger.last_income,
            last_expenses: ledger.last_expenses,
            year_actions: ledger.year_actions,
        })
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Log a warning for every stored id that no longer resolves against the
    /// registries. The ids stay in the snapshot; they are inert at runtime.
    pub fn warn_dangling_ids(&self, registries: &Registries) {
        for id in &self.illnesses.0 {
            if registries.illness(id).is_none() {
                warn!(illness = %id, "snapshot carries an unknown illness id");
            }
        }
        if let Some(job) = &self.career.current_job {
            if registries.job(job).is_none() {
                warn!(job = %job, "snapshot carries an unknown job id");
            }
        }
        if let Some(college) = &self.education.current_college {
            if registries.college(college).is_none() {
                warn!(college = %college, "snapshot carries an unknown college id");
            }
        }
        for asset in &self.assets.0 {
            if registries.asset(&asset.id).is_none() {
                warn!(asset = %asset.id, "snapshot carries an unknown asset id");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::clock::SimClock;
    use crate::ecs::test_helpers::spawn_test_player;

    #[test]
    fn capture_embeds_the_player_and_ledger() {
        let mut app = build_sim_app(77);
        let player = spawn_test_player(&mut app);
        app.world_mut().resource_mut::<YearLedger>().last_income = 123.0;

        let year = app.world().resource::<SimClock>().year;
        let snapshot = SimSnapshot::capture(app.world_mut(), player, 77, year).unwrap();

        assert_eq!(snapshot.seed, 77);
        assert_eq!(snapshot.year, 0);
        assert_eq!(snapshot.identity.name, "Test Subject");
        assert_eq!(snapshot.last_income, 123.0);
        assert!(snapshot.npcs.is_empty());
    }

    #[test]
    fn capture_without_a_player_fails() {
        let mut app = build_sim_app(77);
        let stray = app.world_mut().spawn_empty().id();
        let result = SimSnapshot::capture(app.world_mut(), stray, 77, 0);
        assert!(matches!(result, Err(SnapshotError::MissingPlayer)));
    }

    #[test]
    fn json_round_trip_preserves_the_aggregate() {
        let mut app = build_sim_app(77);
        let player = spawn_test_player(&mut app);
        let snapshot = SimSnapshot::capture(app.world_mut(), player, 77, 0).unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.identity, snapshot.identity);
        assert_eq!(back.stats, snapshot.stats);
        assert_eq!(back.wallet, snapshot.wallet);
        assert_eq!(back.relationships, snapshot.relationships);
    }
}
