//! Yearly event definitions.
//!
//! Every event is plain data: eligibility bounds, an optional [`EventRule`]
//! predicate, a weight for the yearly draw, a log line, and a tagged
//! [`EventEffect`] applied through a single `match` in the event engine. No
//! behavior hides in closures, so definitions serialize and diff cleanly.

use serde::{Deserialize, Serialize};

use crate::model::{EducationLevel, LifeStage, RelationKind, StatKind};

/// Data-declared eligibility predicate, evaluated against the player's
/// current state after the age and life-stage filters pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventRule {
    HasIllness(String),
    LacksIllness(String),
    /// Currently in `level` with at least `min_years` spent in it.
    InLevelForYears {
        level: EducationLevel,
        min_years: u32,
    },
    /// Some bond of this kind exists.
    HasBond(RelationKind),
    /// Some bond has a romantic score above the threshold.
    RomanticAbove(i32),
}

/// What an event does to the player when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventEffect {
    /// Log line only.
    Narrate,
    AdjustStat { stat: StatKind, amount: i32 },
    /// Uniform pick among the listed deltas.
    AdjustStatOneOf { stat: StatKind, choices: Vec<i32> },
    /// Stat delta tied to a bonded NPC; the log line may interpolate the
    /// NPC's name via `{name}`. No-op when no such bond exists.
    BondedAdjustStat {
        relation: RelationKind,
        stat: StatKind,
        amount: i32,
    },
    /// Health and happiness hit with a rarer, grimmer alternate log line.
    Mishap {
        health: i32,
        happiness: i32,
        grim_chance: f64,
        grim_log: String,
    },
    ContractIllness(String),
    CureIllness { illness: String, health_gain: i32 },
    /// Integer windfall of `base` plus a uniform draw in `[0, spread)`.
    Windfall { base: i64, spread: i64 },
    GraduateHighSchool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDef {
    pub id: String,
    pub tags: Vec<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    /// When present, the player's life stage must be listed.
    pub life_stages: Option<Vec<LifeStage>>,
    pub weight: f64,
    pub rule: Option<EventRule>,
    /// Narrative line recorded when the event fires. `{name}` interpolates
    /// the bonded NPC for `BondedAdjustStat`.
    pub log: String,
    pub log_tags: Vec<String>,
    pub effect: EventEffect,
}

struct EventBuilder {
    def: EventDef,
}

fn event(id: &str, tags: &[&str], weight: f64) -> EventBuilder {
    EventBuilder {
        def: EventDef {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            min_age: None,
            max_age: None,
            life_stages: None,
            weight,
            rule: None,
            log: String::new(),
            log_tags: Vec::new(),
            effect: EventEffect::Narrate,
        },
    }
}

impl EventBuilder {
    fn ages(mut self, min: u32, max: u32) -> Self {
        self.def.min_age = Some(min);
        self.def.max_age = Some(max);
        self
    }

    fn max_age(mut self, max: u32) -> Self {
        self.def.max_age = Some(max);
        self
    }

    fn rule(mut self, rule: EventRule) -> Self {
        self.def.rule = Some(rule);
        self
    }

    fn log(mut self, text: &str, tags: &[&str]) -> Self {
        self.def.log = text.to_string();
        self.def.log_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    fn effect(mut self, effect: EventEffect) -> Self {
        self.def.effect = effect;
        self
    }

    fn build(self) -> EventDef {
        self.def
    }
}

pub fn builtin_events() -> Vec<EventDef> {
    vec![
        event("parent_job_loss", &["family", "economy"], 2.0)
            .ages(6, 18)
            .log(
                "One of my parents lost their job. Things might be tight for a while.",
                &["family"],
            )
            .effect(EventEffect::AdjustStat {
                stat: StatKind::Happiness,
                amount: -5,
            })
            .build(),
        event("toddler_giggle", &["flavor"], 4.0)
            .max_age(3)
            .log(
                "I babbled a series of nonsense sounds that had everyone laughing.",
                &["toddler"],
            )
            .build(),
        event("classmate_praise", &["school"], 3.0)
            .ages(7, 18)
            .log("A classmate said I was pretty cool today.", &["school"])
            .effect(EventEffect::AdjustStat {
                stat: StatKind::Happiness,
                amount: 3,
            })
            .build(),
        event("classmate_tease", &["school"], 3.0)
            .ages(8, 17)
            .log("Someone called me lame in front of the class. Ouch.", &["school"])
            .effect(EventEffect::AdjustStat {
                stat: StatKind::Happiness,
                amount: -4,
            })
            .build(),
        event("green_liquid", &["random"], 2.0)
            .ages(4, 70)
            .log(
                "I stepped into a mysterious green liquid on the sidewalk. Probably fine.",
                &["weird"],
            )
            .effect(EventEffect::AdjustStatOneOf {
                stat: StatKind::Happiness,
                choices: vec![-3, 2, 4],
            })
            .build(),
        event("flu_event", &["health"], 4.0)
            .ages(4, 70)
            .rule(EventRule::LacksIllness("flu".into()))
            .log("I caught a nasty flu and feel miserable.", &["health"])
            .effect(EventEffect::ContractIllness("flu".into()))
            .build(),
        event("flu_recovery", &["health"], 1.0)
            .ages(4, 80)
            .rule(EventRule::HasIllness("flu".into()))
            .log("Finally beat the flu!", &["health"])
            .effect(EventEffect::CureIllness {
                illness: "flu".into(),
                health_gain: 5,
            })
            .build(),
        event("sibling_argument", &["family"], 2.0)
            .ages(6, 25)
            .log("My sibling {name} and I argued about snacks.", &["family"])
            .effect(EventEffect::BondedAdjustStat {
                relation: RelationKind::Sibling,
                stat: StatKind::Happiness,
                amount: -3,
            })
            .build(),
        event("friend_email", &["friend"], 2.0)
            .ages(10, 40)
            .log(
                "A friend sent me a stream of ridiculous emails. Some were actually funny.",
                &["friend"],
            )
            .build(),
        event("car_incident", &["danger"], 1.0)
            .ages(16, 70)
            .log("Someone crashed into the car ahead of me. Close call!", &["danger"])
            .effect(EventEffect::Mishap {
                health: -10,
                happiness: -6,
                grim_chance: 0.1,
                grim_log: "I barely survived a car accident. Life feels fragile.".into(),
            })
            .build(),
        event("acne", &["health"], 3.0)
            .ages(12, 18)
            .log("My acne decided to stage a coup on my face.", &["teen"])
            .effect(EventEffect::AdjustStat {
                stat: StatKind::Looks,
                amount: -5,
            })
            .build(),
        event("highschool_grad", &["education"], 2.0)
            .ages(17, 19)
            .rule(EventRule::InLevelForYears {
                level: EducationLevel::High,
                min_years: 4,
            })
            .log("I graduated from high school!", &["education"])
            .effect(EventEffect::GraduateHighSchool)
            .build(),
        event("supportive_partner", &["relationships"], 2.0)
            .ages(18, 80)
            .rule(EventRule::RomanticAbove(40))
            .log(
                "My partner supported me through a rough patch this year.",
                &["relationships"],
            )
            .effect(EventEffect::AdjustStat {
                stat: StatKind::Happiness,
                amount: 6,
            })
            .build(),
        event("child_laughter", &["family"], 1.0)
            .ages(26, 70)
            .rule(EventRule::HasBond(RelationKind::Child))
            .log(
                "My kid told a joke so bad it looped around and became legendary.",
                &["family"],
            )
            .build(),
        event("inheritance", &["finance"], 0.6)
            .ages(25, 70)
            .log("", &["finance"])
            .effect(EventEffect::Windfall {
                base: 5_000,
                spread: 20_000,
            })
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toddler_giggle_has_no_lower_age_bound() {
        let events = builtin_events();
        let giggle = events.iter().find(|e| e.id == "toddler_giggle").unwrap();
        assert_eq!(giggle.min_age, None);
        assert_eq!(giggle.max_age, Some(3));
        assert_eq!(giggle.effect, EventEffect::Narrate);
    }

    #[test]
    fn flu_pair_guards_against_double_state() {
        let events = builtin_events();
        let onset = events.iter().find(|e| e.id == "flu_event").unwrap();
        let recovery = events.iter().find(|e| e.id == "flu_recovery").unwrap();
        assert_eq!(onset.rule, Some(EventRule::LacksIllness("flu".into())));
        assert_eq!(recovery.rule, Some(EventRule::HasIllness("flu".into())));
    }

    #[test]
    fn inheritance_is_rarest_by_weight() {
        let events = builtin_events();
        let min = events
            .iter()
            .min_by(|a, b| a.weight.total_cmp(&b.weight))
            .unwrap();
        assert_eq!(min.id, "inheritance");
    }
}
