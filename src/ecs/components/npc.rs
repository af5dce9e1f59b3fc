use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::model::RelationKind;

/// Marker for NPC entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct Npc;

/// Lightweight NPC descriptor. NPCs exist to anchor the player's bonds and
/// to give events someone to name; they do not run their own yearly systems.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub relationship_type: RelationKind,
    pub occupation: String,
    pub mood: i32,
    pub health: i32,
    pub alive: bool,
}

impl NpcProfile {
    pub fn new(id: &str, name: String, age: u32, relationship_type: RelationKind) -> Self {
        Self {
            id: id.to_string(),
            name,
            age,
            relationship_type,
            occupation: "Unknown".to_string(),
            mood: 60,
            health: 80,
            alive: true,
        }
    }
}
