//! Discrete player actions and their results.
//!
//! Actions run between yearly advances. They never advance the player's age
//! and never trigger the yearly event engine.

use serde::Serialize;

/// Social gesture toward a single NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    SpendTime,
    Compliment,
    Argue,
    Apologize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PerformActivity { activity: String },
    BuyAsset { asset_id: String },
    ApplyForJob { job_id: String },
    WorkHarder,
    SlackOff,
    ApplyToCollege { college_id: String },
    Relationship { npc_id: String, gesture: Gesture },
    DoctorVisit,
    Exercise,
    Rest,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub kind: ActionKind,
    pub outcome: ActionOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The action took effect.
    Applied,
    /// A precondition failed; the narrative log explains it in-world.
    Rejected { reason: String },
    /// The action did not apply to the current state (unknown id, no job,
    /// dead player). Nothing changed.
    Ignored,
}

impl ActionOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
