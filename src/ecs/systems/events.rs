//! Yearly event engine.
//!
//! Builds the candidate pool from the event registry, appends at most one
//! synthetic illness-onset candidate, then makes up to two weighted draws.
//! The draws sample the pool with replacement; a frequent event can fire
//! twice in the same year.

use std::collections::HashMap;

use bevy_app::{App, Plugin};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;

use crate::ecs::components::{
    EducationState, HistoryLog, Illnesses, NpcProfile, Player, Relationships, Stats, Vitals, Wallet,
};
use crate::ecs::resources::EventsRng;
use crate::ecs::schedule::{DomainSet, SimTick};
use crate::model::{LifeStage, StatKind};
use crate::random::{pick_uniform, pick_weighted, with_probability};
use crate::registry::{EventDef, EventEffect, EventRule, IllnessDef, Registries};

const MAX_DRAWS: usize = 2;
const ONSET_WEIGHT: f64 = 1.0;

pub struct EventsPlugin;

impl Plugin for EventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, run_yearly_events.in_set(DomainSet::Events));
    }
}

#[allow(clippy::type_complexity)]
fn run_yearly_events(
    registries: Res<Registries>,
    mut rng: ResMut<EventsRng>,
    npcs: Query<&NpcProfile>,
    mut players: Query<
        (
            &Vitals,
            &mut Stats,
            &mut Wallet,
            &mut EducationState,
            &mut Illnesses,
            &Relationships,
            &mut HistoryLog,
        ),
        With<Player>,
    >,
) {
    let npc_names: HashMap<String, String> = npcs
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();

    for (vitals, mut stats, mut wallet, mut education, mut illnesses, bonds, mut log) in
        players.iter_mut()
    {
        if !vitals.alive {
            continue;
        }
        let mut scope = EventScope {
            age: vitals.age,
            stats: &mut stats,
            wallet: &mut wallet,
            education: &mut education,
            illnesses: &mut illnesses,
            bonds,
            log: &mut log,
        };
        run_yearly_event_pool(&mut scope, &registries, &npc_names, &mut rng.0);
    }
}

/// The mutable slice of player state an event may touch.
pub(crate) struct EventScope<'a> {
    pub age: u32,
    pub stats: &'a mut Stats,
    pub wallet: &'a mut Wallet,
    pub education: &'a mut EducationState,
    pub illnesses: &'a mut Illnesses,
    pub bonds: &'a Relationships,
    pub log: &'a mut HistoryLog,
}

enum Candidate<'a> {
    Registry(&'a EventDef),
    IllnessOnset(&'a IllnessDef),
}

impl Candidate<'_> {
    fn id(&self) -> String {
        match self {
            Candidate::Registry(def) => def.id.clone(),
            Candidate::IllnessOnset(def) => format!("illness_{}", def.id),
        }
    }

    fn weight(&self) -> f64 {
        match self {
            Candidate::Registry(def) => def.weight,
            Candidate::IllnessOnset(_) => ONSET_WEIGHT,
        }
    }
}

fn rule_holds(rule: &EventRule, scope: &EventScope<'_>) -> bool {
    match rule {
        EventRule::HasIllness(id) => scope.illnesses.has(id),
        EventRule::LacksIllness(id) => !scope.illnesses.has(id),
        EventRule::InLevelForYears { level, min_years } => {
            scope.education.current_level == *level && scope.education.years_in_level >= *min_years
        }
        EventRule::HasBond(kind) => scope.bonds.any_of_kind(*kind),
        EventRule::RomanticAbove(threshold) => {
            scope.bonds.0.iter().any(|b| b.romantic > *threshold)
        }
    }
}

fn eligible(def: &EventDef, scope: &EventScope<'_>) -> bool {
    if let Some(min) = def.min_age {
        if scope.age < min {
            return false;
        }
    }
    if let Some(max) = def.max_age {
        if scope.age > max {
            return false;
        }
    }
    if let Some(rule) = &def.rule {
        if !rule_holds(rule, scope) {
            return false;
        }
    }
    if let Some(stages) = &def.life_stages {
        if !stages.contains(&LifeStage::from_age(scope.age)) {
            return false;
        }
    }
    true
}

/// First registry illness whose age bounds contain the player's age and which
/// the player does not already carry.
fn first_onset_candidate<'a>(
    registries: &'a Registries,
    age: u32,
    illnesses: &Illnesses,
) -> Option<&'a IllnessDef> {
    registries
        .illnesses
        .iter()
        .find(|ill| ill.age_in_range(age) && !illnesses.has(&ill.id))
}

/// Run one year of events against the scope. Returns the triggered ids in
/// draw order.
pub(crate) fn run_yearly_event_pool(
    scope: &mut EventScope<'_>,
    registries: &Registries,
    npc_names: &HashMap<String, String>,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut candidates: Vec<Candidate<'_>> = registries
        .events
        .iter()
        .filter(|def| eligible(def, scope))
        .map(Candidate::Registry)
        .collect();
    if let Some(onset) = first_onset_candidate(registries, scope.age, scope.illnesses) {
        candidates.push(Candidate::IllnessOnset(onset));
    }

    let mut triggered = Vec::new();
    let draws = MAX_DRAWS.min(candidates.len());
    for _ in 0..draws {
        let Some(candidate) = pick_weighted(rng, &candidates, Candidate::weight) else {
            break;
        };
        triggered.push(candidate.id());
        apply_candidate(candidate, scope, npc_names, rng);
    }
    triggered
}

fn apply_candidate(
    candidate: &Candidate<'_>,
    scope: &mut EventScope<'_>,
    npc_names: &HashMap<String, String>,
    rng: &mut impl Rng,
) {
    match candidate {
        Candidate::Registry(def) => apply_event(def, scope, npc_names, rng),
        Candidate::IllnessOnset(def) => {
            scope.illnesses.add(&def.id);
            scope.log.push(
                format!("I have been diagnosed with {}.", def.name),
                scope.age,
                &["health"],
            );
        }
    }
}

fn apply_event(
    def: &EventDef,
    scope: &mut EventScope<'_>,
    npc_names: &HashMap<String, String>,
    rng: &mut impl Rng,
) {
    let tags: Vec<&str> = def.log_tags.iter().map(String::as_str).collect();
    match &def.effect {
        EventEffect::Narrate => {
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
        EventEffect::AdjustStat { stat, amount } => {
            scope.stats.modify(*stat, *amount);
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
        EventEffect::AdjustStatOneOf { stat, choices } => {
            if let Some(amount) = pick_uniform(rng, choices) {
                scope.stats.modify(*stat, *amount);
            }
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
        EventEffect::BondedAdjustStat {
            relation,
            stat,
            amount,
        } => {
            let Some(bond) = scope.bonds.first_of_kind(*relation) else {
                return;
            };
            // A bond whose NPC no longer exists makes the whole effect a no-op.
            let Some(name) = npc_names.get(&bond.npc_id) else {
                return;
            };
            scope.stats.modify(*stat, *amount);
            scope
                .log
                .push(def.log.replace("{name}", name), scope.age, &tags);
        }
        EventEffect::Mishap {
            health,
            happiness,
            grim_chance,
            grim_log,
        } => {
            scope.stats.modify(StatKind::Health, *health);
            scope.stats.modify(StatKind::Happiness, *happiness);
            let line = if with_probability(rng, *grim_chance) {
                grim_log.clone()
            } else {
                def.log.clone()
            };
            scope.log.push(line, scope.age, &tags);
        }
        EventEffect::ContractIllness(id) => {
            scope.illnesses.add(id);
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
        EventEffect::CureIllness {
            illness,
            health_gain,
        } => {
            scope.illnesses.remove(illness);
            scope.stats.modify(StatKind::Health, *health_gain);
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
        EventEffect::Windfall { base, spread } => {
            let amount = base + rng.random_range(0..*spread);
            scope.wallet.adjust(amount as f64);
            scope.log.push(
                format!("A distant relative left me an inheritance of ${amount}."),
                scope.age,
                &tags,
            );
        }
        EventEffect::GraduateHighSchool => {
            scope.education.current_level = crate::model::EducationLevel::High;
            scope.education.completed_high_school = true;
            scope.log.push(def.log.clone(), scope.age, &tags);
        }
    }
}
