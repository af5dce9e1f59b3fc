pub mod npc;
pub mod player;

pub use npc::{Npc, NpcProfile};
pub use player::{
    Bond, CareerState, EducationState, HistoryLog, Identity, Illnesses, OwnedAssets, Player,
    Relationships, Stats, Vitals, Wallet,
};
