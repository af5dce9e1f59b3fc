//! Discrete player actions, run between yearly advances.
//!
//! Actions mutate the world immediately through an exclusive entry point
//! instead of a queued-command system; the session calls
//! [`process_action`] directly and gets the outcome back synchronously.

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::{Mut, World};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::ecs::components::{
    CareerState, EducationState, HistoryLog, Illnesses, NpcProfile, OwnedAssets, Player,
    Relationships, Stats, Vitals, Wallet,
};
use crate::ecs::resources::{ActionsRng, YearLedger};
use crate::model::{ActionKind, ActionOutcome, ActionResult, Gesture, StatKind};
use crate::registry::Registries;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TRAVEL_COST: f64 = 400.0;
const DOCTOR_FEE: f64 = 500.0;
const DOCTOR_CURE_CHANCE: f64 = 0.7;
const COMPLIMENT_SUCCESS: f64 = 0.7;
const APOLOGY_SUCCESS: f64 = 0.6;
const NEW_JOB_PERFORMANCE: i32 = 55;

/// Apply one player action to the world and report what happened.
///
/// A missing or dead player makes every action inert.
pub fn process_action(world: &mut World, kind: ActionKind) -> ActionResult {
    let mut player_query = world.query_filtered::<Entity, With<Player>>();
    let player = player_query.iter(world).next();
    let Some(player) = player else {
        return ActionResult {
            kind,
            outcome: ActionOutcome::Ignored,
        };
    };
    let alive = world.get::<Vitals>(player).is_some_and(|v| v.alive);
    if !alive {
        return ActionResult {
            kind,
            outcome: ActionOutcome::Ignored,
        };
    }

    let outcome = match &kind {
        ActionKind::PerformActivity { activity } => {
            perform_activity(world, player, activity.clone())
        }
        ActionKind::BuyAsset { asset_id } => buy_asset(world, player, asset_id.clone()),
        ActionKind::ApplyForJob { job_id } => apply_for_job(world, player, job_id.clone()),
        ActionKind::WorkHarder => work_harder(world, player),
        ActionKind::SlackOff => slack_off(world, player),
        ActionKind::ApplyToCollege { college_id } => {
            apply_to_college(world, player, college_id.clone())
        }
        ActionKind::Relationship { npc_id, gesture } => {
            relationship_gesture(world, player, npc_id.clone(), *gesture)
        }
        ActionKind::DoctorVisit => doctor_visit(world, player),
        ActionKind::Exercise => exercise(world, player),
        ActionKind::Rest => rest(world, player),
    };
    ActionResult { kind, outcome }
}

// ---------------------------------------------------------------------------
// Small world helpers
// ---------------------------------------------------------------------------

fn adjust_stat(world: &mut World, player: Entity, stat: StatKind, amount: i32) {
    if let Some(mut stats) = world.get_mut::<Stats>(player) {
        stats.modify(stat, amount);
    }
}

fn adjust_money(world: &mut World, player: Entity, amount: f64) {
    if let Some(mut wallet) = world.get_mut::<Wallet>(player) {
        wallet.adjust(amount);
    }
}

fn money(world: &World, player: Entity) -> f64 {
    world.get::<Wallet>(player).map_or(0.0, |w| w.balance)
}

fn smarts(world: &World, player: Entity) -> i32 {
    world.get::<Stats>(player).map_or(0, |s| s.smarts)
}

fn push_log(world: &mut World, player: Entity, text: impl Into<String>, tags: &[&str]) {
    let age = world.get::<Vitals>(player).map_or(0, |v| v.age);
    if let Some(mut log) = world.get_mut::<HistoryLog>(player) {
        log.push(text, age, tags);
    }
}

fn with_actions_rng<T>(world: &mut World, f: impl FnOnce(&mut World, &mut SmallRng) -> T) -> T {
    world.resource_scope(|world, mut rng: Mut<ActionsRng>| f(world, &mut rng.0))
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// Named free-form activities. Every call counts against the year's action
/// tally, including unrecognized ids.
fn perform_activity(world: &mut World, player: Entity, activity: String) -> ActionOutcome {
    world.resource_mut::<YearLedger>().year_actions += 1;
    match activity.as_str() {
        "babble" => {
            adjust_stat(world, player, StatKind::Happiness, 2);
            push_log(world, player, "I babbled happily at everyone.", &["activity"]);
        }
        "play" => {
            adjust_stat(world, player, StatKind::Happiness, 4);
            adjust_stat(world, player, StatKind::Smarts, 1);
            push_log(
                world,
                player,
                "Played with toys and learned about gravity (again).",
                &["activity"],
            );
        }
        "study" => {
            if let Some(mut education) = world.get_mut::<EducationState>(player) {
                education.grades = (education.grades + 5).min(100);
            }
            push_log(world, player, "Hit the books extra hard.", &["activity"]);
        }
        "friends" => {
            adjust_stat(world, player, StatKind::Happiness, 5);
            push_log(
                world,
                player,
                "Hung out with friends and swapped memes.",
                &["activity"],
            );
        }
        "parttime" => {
            adjust_money(world, player, 500.0);
            adjust_stat(world, player, StatKind::Happiness, -1);
            push_log(
                world,
                player,
                "Worked a part-time gig for some cash.",
                &["activity"],
            );
        }
        "exercise" => {
            adjust_stat(world, player, StatKind::Health, 4);
            adjust_stat(world, player, StatKind::Happiness, 1);
            push_log(world, player, "Hit the gym and felt energized.", &["health"]);
        }
        "nightout" => {
            adjust_money(world, player, -150.0);
            adjust_stat(world, player, StatKind::Happiness, 4);
            push_log(world, player, "Went out for a fun night.", &["activity"]);
        }
        "travel" => {
            if money(world, player) >= TRAVEL_COST {
                adjust_money(world, player, -TRAVEL_COST);
                adjust_stat(world, player, StatKind::Happiness, 6);
                push_log(
                    world,
                    player,
                    "Took a short trip and saw something new.",
                    &["activity"],
                );
            } else {
                push_log(
                    world,
                    player,
                    "Wanted to travel but could not afford it.",
                    &["finance"],
                );
                return ActionOutcome::rejected("could not afford to travel");
            }
        }
        "family" => {
            adjust_stat(world, player, StatKind::Happiness, 3);
            push_log(world, player, "Hosted a cozy family dinner.", &["activity"]);
        }
        "hobby" => {
            adjust_stat(world, player, StatKind::Happiness, 2);
            adjust_stat(world, player, StatKind::Comedy, 2);
            push_log(world, player, "Spent time on a favorite hobby.", &["activity"]);
        }
        "volunteer" => {
            adjust_stat(world, player, StatKind::Happiness, 4);
            push_log(world, player, "Volunteered at a local shelter.", &["activity"]);
        }
        "relax" => {
            adjust_stat(world, player, StatKind::Health, 2);
            push_log(world, player, "Relaxed and took deep breaths.", &["activity"]);
        }
        "stories" => {
            adjust_stat(world, player, StatKind::Comedy, 3);
            push_log(world, player, "Shared stories with young folks.", &["activity"]);
        }
        "stroll" => {
            adjust_stat(world, player, StatKind::Health, 2);
            push_log(world, player, "Enjoyed a park stroll.", &["activity"]);
        }
        _ => return ActionOutcome::Ignored,
    }
    ActionOutcome::Applied
}

// ---------------------------------------------------------------------------
// Economy and career
// ---------------------------------------------------------------------------

fn buy_asset(world: &mut World, player: Entity, asset_id: String) -> ActionOutcome {
    let Some(asset) = world.resource::<Registries>().asset(&asset_id).cloned() else {
        return ActionOutcome::Ignored;
    };
    if money(world, player) < asset.price {
        push_log(
            world,
            player,
            format!("I cannot afford {}.", asset.name),
            &["finance"],
        );
        return ActionOutcome::rejected("insufficient funds");
    }
    adjust_money(world, player, -asset.price);
    let name = asset.name.clone();
    if let Some(mut owned) = world.get_mut::<OwnedAssets>(player) {
        owned.0.push(asset);
    }
    push_log(world, player, format!("Purchased {name}."), &["finance"]);
    ActionOutcome::Applied
}

fn apply_for_job(world: &mut World, player: Entity, job_id: String) -> ActionOutcome {
    let Some(job) = world.resource::<Registries>().job(&job_id).cloned() else {
        return ActionOutcome::Ignored;
    };
    let employed = world
        .get::<CareerState>(player)
        .is_some_and(|c| c.is_employed());
    if employed {
        push_log(world, player, "I already have a job.", &["career"]);
        return ActionOutcome::rejected("already employed");
    }
    let level = world
        .get::<EducationState>(player)
        .map_or(crate::model::EducationLevel::None, |e| e.current_level);
    if level < job.min_education || smarts(world, player) < job.min_smarts {
        push_log(
            world,
            player,
            format!("I was rejected from {}.", job.title),
            &["career"],
        );
        return ActionOutcome::rejected("did not meet the requirements");
    }
    if let Some(mut career) = world.get_mut::<CareerState>(player) {
        *career = CareerState {
            current_job: Some(job.id.clone()),
            job_title: job.title.clone(),
            salary_per_year: job.starting_salary,
            performance: NEW_JOB_PERFORMANCE,
            unemployed_years: 0,
        };
    }
    push_log(
        world,
        player,
        format!("I landed a job as {}!", job.title),
        &["career"],
    );
    ActionOutcome::Applied
}

fn work_harder(world: &mut World, player: Entity) -> ActionOutcome {
    {
        let Some(mut career) = world.get_mut::<CareerState>(player) else {
            return ActionOutcome::Ignored;
        };
        if !career.is_employed() {
            return ActionOutcome::Ignored;
        }
        career.performance = (career.performance + 8).min(100);
    }
    adjust_stat(world, player, StatKind::Happiness, -1);
    push_log(world, player, "I worked extra hard this year.", &["career"]);
    ActionOutcome::Applied
}

/// Slacking costs performance but, unlike working harder, no happiness.
fn slack_off(world: &mut World, player: Entity) -> ActionOutcome {
    {
        let Some(mut career) = world.get_mut::<CareerState>(player) else {
            return ActionOutcome::Ignored;
        };
        if !career.is_employed() {
            return ActionOutcome::Ignored;
        }
        career.performance = (career.performance - 8).max(0);
    }
    push_log(
        world,
        player,
        "I slacked off at work. Hopefully no one noticed.",
        &["career"],
    );
    ActionOutcome::Applied
}

fn apply_to_college(world: &mut World, player: Entity, college_id: String) -> ActionOutcome {
    let Some(college) = world.resource::<Registries>().college(&college_id).cloned() else {
        return ActionOutcome::Ignored;
    };
    let already_enrolled = world
        .get::<EducationState>(player)
        .is_some_and(|e| e.current_college.as_deref() == Some(college.id.as_str()));
    if already_enrolled {
        return ActionOutcome::Ignored;
    }
    let grades = world.get::<EducationState>(player).map_or(0, |e| e.grades);
    if grades < college.min_grades || smarts(world, player) < college.min_smarts {
        push_log(
            world,
            player,
            format!("I was not accepted to {}.", college.name),
            &["education"],
        );
        return ActionOutcome::rejected("not accepted");
    }
    if money(world, player) < college.cost {
        push_log(
            world,
            player,
            format!("I cannot afford to enroll in {}.", college.name),
            &["education"],
        );
        return ActionOutcome::rejected("insufficient funds");
    }
    if let Some(mut education) = world.get_mut::<EducationState>(player) {
        education.current_college = Some(college.id.clone());
        education.progress = 0;
        education.current_level = crate::model::EducationLevel::College;
    }
    adjust_money(world, player, -college.cost);
    push_log(
        world,
        player,
        format!("Enrolled in {}!", college.name),
        &["education"],
    );
    ActionOutcome::Applied
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

fn relationship_gesture(
    world: &mut World,
    player: Entity,
    npc_id: String,
    gesture: Gesture,
) -> ActionOutcome {
    let has_bond = world
        .get::<Relationships>(player)
        .is_some_and(|r| r.bond(&npc_id).is_some());
    if !has_bond {
        return ActionOutcome::Ignored;
    }
    let name = {
        let mut npcs = world.query::<&NpcProfile>();
        npcs.iter(world)
            .find(|p| p.id == npc_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| npc_id.clone())
    };

    with_actions_rng(world, |world, rng| match gesture {
        Gesture::SpendTime => {
            let gain = rng.random_range(4..=8);
            mutate_bond(world, player, &npc_id, |bond| {
                bond.closeness = (bond.closeness + gain).min(100);
            });
            adjust_stat(world, player, StatKind::Happiness, 2);
            push_log(world, player, format!("Spent time with {name}."), &["relationships"]);
        }
        Gesture::Compliment => {
            if rng.random::<f64>() < COMPLIMENT_SUCCESS {
                mutate_bond(world, player, &npc_id, |bond| {
                    bond.closeness = (bond.closeness + 6).min(100);
                    bond.respect = (bond.respect + 4).min(100);
                });
                push_log(
                    world,
                    player,
                    format!("{name} loved my compliment!"),
                    &["relationships"],
                );
            } else {
                mutate_bond(world, player, &npc_id, |bond| {
                    bond.conflict = (bond.conflict + 4).min(100);
                });
                push_log(
                    world,
                    player,
                    format!("{name} rolled their eyes at me."),
                    &["relationships"],
                );
            }
        }
        Gesture::Argue => {
            let heat = rng.random_range(5..=10);
            mutate_bond(world, player, &npc_id, |bond| {
                bond.conflict = (bond.conflict + heat).min(100);
            });
            adjust_stat(world, player, StatKind::Happiness, -4);
            push_log(world, player, format!("Argued with {name}."), &["relationships"]);
        }
        Gesture::Apologize => {
            if rng.random::<f64>() < APOLOGY_SUCCESS {
                mutate_bond(world, player, &npc_id, |bond| {
                    bond.conflict = (bond.conflict - 6).max(0);
                    bond.closeness = (bond.closeness + 3).min(100);
                });
                push_log(
                    world,
                    player,
                    format!("{name} accepted my apology."),
                    &["relationships"],
                );
            } else {
                push_log(
                    world,
                    player,
                    format!("{name} was not ready to forgive me."),
                    &["relationships"],
                );
            }
        }
    });
    ActionOutcome::Applied
}

fn mutate_bond(
    world: &mut World,
    player: Entity,
    npc_id: &str,
    f: impl FnOnce(&mut crate::ecs::components::Bond),
) {
    if let Some(mut relationships) = world.get_mut::<Relationships>(player) {
        if let Some(bond) = relationships.bond_mut(npc_id) {
            f(bond);
        }
    }
}

// ---------------------------------------------------------------------------
// Health actions
// ---------------------------------------------------------------------------

fn doctor_visit(world: &mut World, player: Entity) -> ActionOutcome {
    if money(world, player) < DOCTOR_FEE {
        push_log(
            world,
            player,
            "I could not afford to see the doctor.",
            &["health"],
        );
        return ActionOutcome::rejected("insufficient funds");
    }
    adjust_money(world, player, -DOCTOR_FEE);
    let first_illness = world
        .get::<Illnesses>(player)
        .and_then(|ill| ill.0.first().cloned());
    // The cure roll is only consumed when there is something to cure.
    let cured = first_illness.is_some()
        && with_actions_rng(world, |_, rng| rng.random::<f64>() < DOCTOR_CURE_CHANCE);
    if cured {
        if let (Some(id), Some(mut illnesses)) = (first_illness, world.get_mut::<Illnesses>(player))
        {
            illnesses.remove(&id);
        }
        push_log(world, player, "Doctor visit cured my illness.", &["health"]);
    } else {
        adjust_stat(world, player, StatKind::Health, 5);
        push_log(
            world,
            player,
            "Doctor gave me a clean bill of health.",
            &["health"],
        );
    }
    ActionOutcome::Applied
}

fn exercise(world: &mut World, player: Entity) -> ActionOutcome {
    adjust_stat(world, player, StatKind::Health, 4);
    push_log(world, player, "I exercised and felt better.", &["health"]);
    ActionOutcome::Applied
}

fn rest(world: &mut World, player: Entity) -> ActionOutcome {
    adjust_stat(world, player, StatKind::Health, 3);
    push_log(world, player, "Took it easy to recover energy.", &["health"]);
    ActionOutcome::Applied
}
