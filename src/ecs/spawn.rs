//! Low-level entity spawners. World generation and snapshot restore both
//! funnel through these so the component bundles stay in one place.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::components::{
    CareerState, EducationState, HistoryLog, Identity, Illnesses, Npc, NpcProfile, OwnedAssets,
    Player, Relationships, Stats, Vitals,
};

/// Everything needed to place a player entity into the world.
#[derive(Debug, Clone)]
pub struct PlayerBundleData {
    pub identity: Identity,
    pub vitals: Vitals,
    pub stats: Stats,
    pub wallet: super::components::Wallet,
    pub education: EducationState,
    pub career: CareerState,
    pub relationships: Relationships,
    pub illnesses: Illnesses,
    pub assets: OwnedAssets,
    pub history: HistoryLog,
}

pub fn spawn_player(world: &mut World, data: PlayerBundleData) -> Entity {
    world
        .spawn((
            Player,
            data.identity,
            data.vitals,
            data.stats,
            data.wallet,
            data.education,
            data.career,
            data.relationships,
            data.illnesses,
            data.assets,
            data.history,
        ))
        .id()
}

pub fn spawn_npc(world: &mut World, profile: NpcProfile) -> Entity {
    world.spawn((Npc, profile)).id()
}
