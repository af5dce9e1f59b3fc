//! Yearly outflow: asset upkeep (with its happiness return) and tuition.

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::components::{
    EducationState, HistoryLog, OwnedAssets, Player, Stats, Vitals, Wallet,
};
use crate::ecs::resources::YearLedger;
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::StatKind;
use crate::registry::Registries;

pub struct ExpensesPlugin;

impl Plugin for ExpensesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, charge_yearly_expenses.in_set(DomainSet::Expenses));
    }
}

#[allow(clippy::type_complexity)]
fn charge_yearly_expenses(
    registries: Res<Registries>,
    mut ledger: ResMut<YearLedger>,
    mut players: Query<
        (
            &Vitals,
            &OwnedAssets,
            &EducationState,
            &mut Stats,
            &mut Wallet,
            &mut HistoryLog,
        ),
        With<Player>,
    >,
) {
    for (vitals, assets, education, mut stats, mut wallet, mut log) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        let ledger = &mut *ledger;
        let expenses = run_yearly_expenses(
            vitals.age,
            assets,
            education,
            &mut stats,
            &mut wallet,
            &registries,
            &mut log,
            &mut ledger.summary,
        );
        ledger.last_expenses = expenses;
    }
}

/// Charge every owned asset's upkeep and any active college tuition.
/// Happiness bonuses apply whether or not the upkeep could be covered; the
/// wallet floors at zero rather than going into debt.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_yearly_expenses(
    age: u32,
    assets: &OwnedAssets,
    education: &EducationState,
    stats: &mut Stats,
    wallet: &mut Wallet,
    registries: &Registries,
    log: &mut HistoryLog,
    summary: &mut Vec<String>,
) -> f64 {
    let mut expenses = 0.0;
    for asset in &assets.0 {
        if asset.yearly_cost > 0.0 {
            expenses += asset.yearly_cost;
            wallet.adjust(-asset.yearly_cost);
        }
        if asset.happiness_bonus != 0 {
            stats.modify(StatKind::Happiness, asset.happiness_bonus);
        }
    }

    if let Some(college_id) = &education.current_college {
        if let Some(college) = registries.college(college_id) {
            expenses += college.cost;
            wallet.adjust(-college.cost);
            log.push(format!("Paid {} tuition.", college.name), age, &["finance"]);
        }
    }

    summary.push(format!("Expenses this year: {expenses}."));
    expenses
}
