pub mod action;
pub mod education;
pub mod life_stage;
pub mod log;
pub mod relation;
pub mod stat;

pub use action::{ActionKind, ActionOutcome, ActionResult, Gesture};
pub use education::EducationLevel;
pub use life_stage::LifeStage;
pub use log::LogEntry;
pub use relation::RelationKind;
pub use stat::StatKind;
