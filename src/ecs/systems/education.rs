//! Yearly schooling: mandatory tiers by age, grade drift, college progress.

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, ResMut};
use rand::Rng;

use crate::ecs::components::{EducationState, HistoryLog, Player, Vitals};
use crate::ecs::resources::{EducationRng, YearLedger};
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::EducationLevel;
use crate::random::range_int;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const GRADE_DRIFT_MIN: i32 = -5;
const GRADE_DRIFT_MAX: i32 = 6;
const COLLEGE_YEARS: u32 = 4;

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct EducationPlugin;

impl Plugin for EducationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, advance_education.in_set(DomainSet::Education));
    }
}

fn advance_education(
    mut rng: ResMut<EducationRng>,
    mut ledger: ResMut<YearLedger>,
    mut players: Query<(&Vitals, &mut EducationState, &mut HistoryLog), With<Player>>,
) {
    for (vitals, mut education, mut log) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        run_school_year(
            vitals.age,
            &mut education,
            &mut rng.0,
            &mut log,
            &mut ledger.summary,
        );
        run_college_year(vitals.age, &mut education, &mut log);
    }
}

/// Mandatory schooling for ages under 18. Entering a new tier resets the
/// year counter; every school year drifts grades within
/// `[GRADE_DRIFT_MIN, GRADE_DRIFT_MAX]`.
pub(crate) fn run_school_year(
    age: u32,
    education: &mut EducationState,
    rng: &mut impl Rng,
    log: &mut HistoryLog,
    summary: &mut Vec<String>,
) {
    let Some(level) = EducationLevel::school_for_age(age) else {
        return;
    };
    if education.current_level != level {
        education.current_level = level;
        education.years_in_level = 0;
        log.push(format!("I started {level} school."), age, &["education"]);
    }
    education.years_in_level += 1;
    let change = range_int(rng, GRADE_DRIFT_MIN, GRADE_DRIFT_MAX);
    education.grades = (education.grades + change).clamp(0, 100);
    summary.push(format!("School life: grades now {}.", education.grades));
}

/// One year of college progress for enrolled players; graduation after the
/// fourth year clears the enrollment.
pub(crate) fn run_college_year(age: u32, education: &mut EducationState, log: &mut HistoryLog) {
    if education.current_college.is_none() {
        return;
    }
    education.progress += 1;
    if education.progress >= COLLEGE_YEARS {
        education.current_level = EducationLevel::College;
        education.current_college = None;
        education.progress = 0;
        log.push("I graduated from college!", age, &["education"]);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::systems::lifecycle::LifecyclePlugin;
    use crate::ecs::test_helpers::{spawn_test_player, tick_years};

    #[test]
    fn grades_drift_within_bounds_every_school_year() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut education = EducationState::default();
            let mut log = HistoryLog::default();
            let mut summary = Vec::new();
            run_school_year(8, &mut education, &mut rng, &mut log, &mut summary);
            assert!((60..=71).contains(&education.grades));
            assert_eq!(education.years_in_level, 1);
            assert_eq!(summary.len(), 1);
        }
    }

    #[test]
    fn preschooler_drifts_grades_without_a_transition_log() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut education = EducationState::default();
        let mut log = HistoryLog::default();
        let mut summary = Vec::new();
        run_school_year(4, &mut education, &mut rng, &mut log, &mut summary);
        assert_eq!(education.current_level, EducationLevel::None);
        assert!(log.entries.is_empty());
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn entering_elementary_resets_year_counter_and_logs() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut education = EducationState {
            years_in_level: 6,
            ..EducationState::default()
        };
        let mut log = HistoryLog::default();
        let mut summary = Vec::new();
        run_school_year(6, &mut education, &mut rng, &mut log, &mut summary);
        assert_eq!(education.current_level, EducationLevel::Elementary);
        assert_eq!(education.years_in_level, 1);
        assert!(log.contains("I started elementary school."));
    }

    #[test]
    fn adults_have_no_school_year() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut education = EducationState {
            current_level: EducationLevel::High,
            grades: 70,
            ..EducationState::default()
        };
        let mut log = HistoryLog::default();
        let mut summary = Vec::new();
        run_school_year(20, &mut education, &mut rng, &mut log, &mut summary);
        assert_eq!(education.grades, 70);
        assert!(summary.is_empty());
    }

    #[test]
    fn college_graduation_after_four_years() {
        let mut education = EducationState {
            current_college: Some("general_college".to_string()),
            ..EducationState::default()
        };
        let mut log = HistoryLog::default();
        for _ in 0..3 {
            run_college_year(20, &mut education, &mut log);
        }
        assert_eq!(education.progress, 3);
        assert!(education.current_college.is_some());

        run_college_year(21, &mut education, &mut log);
        assert_eq!(education.current_level, EducationLevel::College);
        assert_eq!(education.current_college, None);
        assert_eq!(education.progress, 0);
        assert!(log.contains("I graduated from college!"));
    }

    #[test]
    fn school_tiers_progress_through_childhood() {
        let mut app = build_sim_app(11);
        app.add_plugins((LifecyclePlugin, EducationPlugin));
        let player = spawn_test_player(&mut app);

        tick_years(&mut app, 14);

        let education = app.world().get::<EducationState>(player).unwrap();
        assert_eq!(education.current_level, EducationLevel::High);
        let log = app.world().get::<HistoryLog>(player).unwrap();
        assert!(log.contains("I started elementary school."));
        assert!(log.contains("I started middle school."));
        assert!(log.contains("I started high school."));
    }
}
