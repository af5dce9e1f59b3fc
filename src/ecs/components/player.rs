//! Player entity components.
//!
//! All derive serde so the snapshot aggregate can embed them directly.

use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::model::{EducationLevel, LogEntry, RelationKind, StatKind};
use crate::registry::AssetDef;

/// Marker for the single player entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub gender: String,
    pub location: String,
}

#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub age: u32,
    pub alive: bool,
}

impl Vitals {
    pub fn newborn() -> Self {
        Self {
            age: 0,
            alive: true,
        }
    }
}

/// The five core stats, each clamped to `[0, 100]` by [`Stats::modify`].
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: i32,
    pub happiness: i32,
    pub smarts: i32,
    pub looks: i32,
    pub comedy: i32,
}

impl Stats {
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Health => self.health,
            StatKind::Happiness => self.happiness,
            StatKind::Smarts => self.smarts,
            StatKind::Looks => self.looks,
            StatKind::Comedy => self.comedy,
        }
    }

    /// Add `amount` to a stat, clamping the result to `[0, 100]`.
    pub fn modify(&mut self, stat: StatKind, amount: i32) -> i32 {
        let slot = match stat {
            StatKind::Health => &mut self.health,
            StatKind::Happiness => &mut self.happiness,
            StatKind::Smarts => &mut self.smarts,
            StatKind::Looks => &mut self.looks,
            StatKind::Comedy => &mut self.comedy,
        };
        *slot = (*slot + amount).clamp(0, 100);
        *slot
    }
}

/// Player money. Never negative; every adjustment rounds to cents.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: f64,
}

impl Wallet {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    /// Apply a signed delta, rounding to two decimals and flooring at zero.
    pub fn adjust(&mut self, amount: f64) -> f64 {
        self.balance = (((self.balance + amount) * 100.0).round() / 100.0).max(0.0);
        self.balance
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.balance >= cost
    }
}

#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationState {
    pub current_level: EducationLevel,
    pub years_in_level: u32,
    /// Clamped to `[0, 100]`.
    pub grades: i32,
    pub current_college: Option<String>,
    /// Years completed toward the 4-year college program.
    pub progress: u32,
    pub completed_high_school: bool,
}

impl Default for EducationState {
    fn default() -> Self {
        Self {
            current_level: EducationLevel::None,
            years_in_level: 0,
            grades: 65,
            current_college: None,
            progress: 0,
            completed_high_school: false,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerState {
    pub current_job: Option<String>,
    pub job_title: String,
    pub salary_per_year: f64,
    pub performance: i32,
    pub unemployed_years: u32,
}

impl CareerState {
    pub fn is_employed(&self) -> bool {
        self.current_job.is_some()
    }
}

impl Default for CareerState {
    /// The unemployed record. Firing resets a career back to exactly this.
    fn default() -> Self {
        Self {
            current_job: None,
            job_title: "Unemployed".to_string(),
            salary_per_year: 0.0,
            performance: 50,
            unemployed_years: 0,
        }
    }
}

/// One edge from the player to an NPC. All four scores live in `[0, 100]`;
/// the mutating site clamps on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub npc_id: String,
    pub relationship_type: RelationKind,
    pub closeness: i32,
    pub respect: i32,
    pub romantic: i32,
    pub conflict: i32,
}

/// Bond list in NPC creation order, at most one bond per NPC id.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationships(pub Vec<Bond>);

impl Relationships {
    pub fn bond(&self, npc_id: &str) -> Option<&Bond> {
        self.0.iter().find(|b| b.npc_id == npc_id)
    }

    pub fn bond_mut(&mut self, npc_id: &str) -> Option<&mut Bond> {
        self.0.iter_mut().find(|b| b.npc_id == npc_id)
    }

    pub fn first_of_kind(&self, kind: RelationKind) -> Option<&Bond> {
        self.0.iter().find(|b| b.relationship_type == kind)
    }

    pub fn any_of_kind(&self, kind: RelationKind) -> bool {
        self.first_of_kind(kind).is_some()
    }
}

/// Duplicate-free list of active illness ids.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Illnesses(pub Vec<String>);

impl Illnesses {
    pub fn add(&mut self, id: &str) {
        if !self.has(id) {
            self.0.push(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|i| i != id);
    }

    pub fn has(&self, id: &str) -> bool {
        self.0.iter().any(|i| i == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Assets the player owns, as copies of their catalog definitions.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnedAssets(pub Vec<AssetDef>);

/// Reverse-chronological narrative log. Unbounded.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    pub entries: Vec<LogEntry>,
}

impl HistoryLog {
    /// Prepend an entry so the newest line reads first.
    pub fn push(&mut self, text: impl Into<String>, age: u32, tags: &[&str]) {
        self.entries.insert(0, LogEntry::new(text, age, tags));
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.first()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_clamp_at_both_bounds() {
        let mut stats = Stats {
            health: 95,
            happiness: 5,
            smarts: 50,
            looks: 50,
            comedy: 50,
        };
        assert_eq!(stats.modify(StatKind::Health, 20), 100);
        assert_eq!(stats.modify(StatKind::Happiness, -20), 0);
        assert_eq!(stats.modify(StatKind::Smarts, 3), 53);
    }

    #[test]
    fn wallet_rounds_to_cents_and_floors_at_zero() {
        let mut wallet = Wallet::new(10.0);
        wallet.adjust(0.005);
        assert_eq!(wallet.balance, 10.01);
        wallet.adjust(-500.0);
        assert_eq!(wallet.balance, 0.0);
    }

    #[test]
    fn illness_list_dedupes() {
        let mut ill = Illnesses::default();
        ill.add("flu");
        ill.add("flu");
        assert_eq!(ill.0.len(), 1);
        ill.remove("flu");
        assert!(ill.is_empty());
    }

    #[test]
    fn history_log_is_newest_first() {
        let mut log = HistoryLog::default();
        log.push("first", 1, &["a"]);
        log.push("second", 2, &["b"]);
        assert_eq!(log.latest().map(|e| e.text.as_str()), Some("second"));
        assert_eq!(log.entries[1].text, "first");
        assert_eq!(log.entries[0].age, 2);
    }

    #[test]
    fn default_career_is_the_unemployed_record() {
        let career = CareerState::default();
        assert!(!career.is_employed());
        assert_eq!(career.job_title, "Unemployed");
        assert_eq!(career.performance, 50);
        assert_eq!(career.salary_per_year, 0.0);
        assert_eq!(career.unemployed_years, 0);
    }
}
