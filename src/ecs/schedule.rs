use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for the main simulation tick. One tick is one in-game year,
/// run manually via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Systems are assigned to phases via `.in_set(SimPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    Last,
}

/// Per-domain system sets within `SimPhase::Update`.
///
/// The yearly pipeline is strictly sequential:
/// ```text
/// Lifecycle → Education → Career → Expenses → Health → Relationships → Events → Death
/// ```
/// Each later domain must see the earlier domains' writes for the year, so
/// every set is ordered after its predecessor.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainSet {
    Lifecycle,
    Education,
    Career,
    Expenses,
    Health,
    Relationships,
    Events,
    Death,
}

/// Configure cross-domain ordering within `SimPhase::Update`.
fn configure_domain_ordering(schedule: &mut Schedule) {
    // All DomainSets live inside SimPhase::Update
    schedule.configure_sets(DomainSet::Lifecycle.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Education.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Career.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Expenses.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Health.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Relationships.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Events.in_set(SimPhase::Update));
    schedule.configure_sets(DomainSet::Death.in_set(SimPhase::Update));

    schedule.configure_sets(DomainSet::Education.after(DomainSet::Lifecycle));
    schedule.configure_sets(DomainSet::Career.after(DomainSet::Education));
    schedule.configure_sets(DomainSet::Expenses.after(DomainSet::Career));
    schedule.configure_sets(DomainSet::Health.after(DomainSet::Expenses));
    schedule.configure_sets(DomainSet::Relationships.after(DomainSet::Health));
    schedule.configure_sets(DomainSet::Events.after(DomainSet::Relationships));
    schedule.configure_sets(DomainSet::Death.after(DomainSet::Events));
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets((SimPhase::PreUpdate, SimPhase::Update, SimPhase::Last).chain());
    configure_domain_ordering(&mut schedule);
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
