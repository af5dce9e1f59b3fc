//! Yearly career handling: salary, taxes, performance swings, firing.

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, ResMut};
use rand::Rng;

use crate::ecs::components::{CareerState, Player, Stats, Vitals, Wallet};
use crate::ecs::resources::{CareerRng, YearLedger};
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::StatKind;
use crate::random::with_probability;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TAX_RATE: f64 = 0.2;
const PROMOTION_BASE_CHANCE: f64 = 0.1;
const PROMOTION_PERFORMANCE_DIVISOR: f64 = 200.0;
const PROMOTION_GAIN: i32 = 5;
const STRESS_CHANCE: f64 = 0.05;
const STRESS_LOSS: i32 = 10;
const STRESS_PERFORMANCE_FLOOR: i32 = 20;
const FIRING_PERFORMANCE_BAR: i32 = 25;
const FIRING_CHANCE: f64 = 0.2;

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct CareerPlugin;

impl Plugin for CareerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, advance_career.in_set(DomainSet::Career));
    }
}

fn advance_career(
    mut rng: ResMut<CareerRng>,
    mut ledger: ResMut<YearLedger>,
    mut players: Query<(&Vitals, &mut CareerState, &mut Stats, &mut Wallet), With<Player>>,
) {
    for (vitals, mut career, mut stats, mut wallet) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        let ledger = &mut *ledger;
        let income = run_career_year(
            &mut career,
            &mut stats,
            &mut wallet,
            &mut rng.0,
            &mut ledger.summary,
        );
        ledger.last_income = income;
    }
}

/// One employed (or job-hunting) year. Returns net income after taxes.
pub(crate) fn run_career_year(
    career: &mut CareerState,
    stats: &mut Stats,
    wallet: &mut Wallet,
    rng: &mut impl Rng,
    summary: &mut Vec<String>,
) -> f64 {
    if !career.is_employed() {
        career.unemployed_years += 1;
        summary.push("Still looking for a job.".to_string());
        return 0.0;
    }

    let salary = career.salary_per_year;
    let taxes = (salary * TAX_RATE).round();
    let net = salary - taxes;
    wallet.adjust(net);
    stats.modify(StatKind::Happiness, 1);
    summary.push(format!("Earned {net} after taxes."));

    if with_probability(
        rng,
        PROMOTION_BASE_CHANCE + career.performance as f64 / PROMOTION_PERFORMANCE_DIVISOR,
    ) {
        career.performance = (career.performance + PROMOTION_GAIN).min(100);
    }
    if with_probability(rng, STRESS_CHANCE) {
        career.performance = (career.performance - STRESS_LOSS).max(STRESS_PERFORMANCE_FLOOR);
        summary.push("Work stress impacted performance.".to_string());
    }
    if career.performance < FIRING_PERFORMANCE_BAR && with_probability(rng, FIRING_CHANCE) {
        summary.push("Got fired due to low performance.".to_string());
        *career = CareerState::default();
    }
    net
}
