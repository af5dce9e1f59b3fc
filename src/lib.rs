pub mod ecs;
pub mod model;
pub mod random;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod testutil;
pub mod worldgen;

pub use model::{ActionKind, ActionOutcome, ActionResult, Gesture, LifeStage};
pub use registry::Registries;
pub use session::{LifeSim, YearReport};
pub use snapshot::{SimSnapshot, SnapshotError};
