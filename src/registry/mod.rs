//! Immutable data registries: events, illnesses, jobs, colleges, assets.
//!
//! Loaded once via [`Registries::builtin`] and injected into the ECS world as
//! a resource. Gameplay code receives the tables explicitly; nothing reads
//! them through globals. Runtime state refers to entries by id, and an id
//! with no matching entry is simply inert.

pub mod assets;
pub mod colleges;
pub mod events;
pub mod illnesses;
pub mod jobs;

use bevy_ecs::resource::Resource;

pub use assets::{AssetCatalog, AssetDef, AssetKind};
pub use colleges::CollegeDef;
pub use events::{EventDef, EventEffect, EventRule};
pub use illnesses::IllnessDef;
pub use jobs::JobDef;

#[derive(Resource, Debug, Clone)]
pub struct Registries {
    pub events: Vec<EventDef>,
    pub illnesses: Vec<IllnessDef>,
    pub jobs: Vec<JobDef>,
    pub colleges: Vec<CollegeDef>,
    pub assets: AssetCatalog,
}

impl Registries {
    pub fn builtin() -> Self {
        Self {
            events: events::builtin_events(),
            illnesses: illnesses::builtin_illnesses(),
            jobs: jobs::builtin_jobs(),
            colleges: colleges::builtin_colleges(),
            assets: assets::builtin_assets(),
        }
    }

    pub fn illness(&self, id: &str) -> Option<&IllnessDef> {
        self.illnesses.iter().find(|i| i.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&JobDef> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn college(&self, id: &str) -> Option<&CollegeDef> {
        self.colleges.iter().find(|c| c.id == id)
    }

    pub fn asset(&self, id: &str) -> Option<&AssetDef> {
        self.assets.find(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_populated() {
        let regs = Registries::builtin();
        assert_eq!(regs.events.len(), 15);
        assert_eq!(regs.illnesses.len(), 4);
        assert_eq!(regs.colleges.len(), 5);
        assert_eq!(regs.assets.houses.len(), 3);
        assert_eq!(regs.assets.cars.len(), 3);
        assert_eq!(regs.assets.collectibles.len(), 3);
        assert!(!regs.jobs.is_empty());
    }

    #[test]
    fn ids_are_unique_within_each_table() {
        let regs = Registries::builtin();
        let unique = |ids: Vec<&str>| {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ids.len(), "duplicate id in {ids:?}");
        };
        unique(regs.events.iter().map(|e| e.id.as_str()).collect());
        unique(regs.illnesses.iter().map(|i| i.id.as_str()).collect());
        unique(regs.jobs.iter().map(|j| j.id.as_str()).collect());
        unique(regs.colleges.iter().map(|c| c.id.as_str()).collect());
        unique(regs.assets.iter_all().map(|a| a.id.as_str()).collect());
    }

    #[test]
    fn lookups_by_id() {
        let regs = Registries::builtin();
        assert!(regs.illness("flu").is_some());
        assert!(regs.college("medical_school").is_some());
        assert!(regs.asset("tiny_apartment").is_some());
        assert!(regs.illness("dragon_pox").is_none());
    }
}
