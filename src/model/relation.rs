use serde::{Deserialize, Serialize};

/// How an NPC relates to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Mother,
    Father,
    Sibling,
    Child,
    Other,
}
