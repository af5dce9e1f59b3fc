use serde::{Deserialize, Serialize};

/// The five clamped core stats carried by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Health,
    Happiness,
    Smarts,
    Looks,
    Comedy,
}
