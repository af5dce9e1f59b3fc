use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllnessDef {
    pub id: String,
    pub name: String,
    pub min_age: u32,
    pub max_age: u32,
    pub severity: u32,
    pub health_drain_per_year: i32,
    pub chance_to_recover: f64,
    pub chance_of_death: f64,
}

impl IllnessDef {
    pub fn age_in_range(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

fn illness(
    id: &str,
    name: &str,
    min_age: u32,
    max_age: u32,
    severity: u32,
    health_drain_per_year: i32,
    chance_to_recover: f64,
    chance_of_death: f64,
) -> IllnessDef {
    IllnessDef {
        id: id.to_string(),
        name: name.to_string(),
        min_age,
        max_age,
        severity,
        health_drain_per_year,
        chance_to_recover,
        chance_of_death,
    }
}

pub fn builtin_illnesses() -> Vec<IllnessDef> {
    vec![
        illness("flu", "Flu", 4, 80, 1, 5, 0.5, 0.01),
        illness("cold", "Severe Cold", 2, 70, 1, 3, 0.6, 0.005),
        illness("injury", "Minor Injury", 6, 90, 2, 7, 0.35, 0.02),
        illness("heart_issue", "Heart Complication", 45, 95, 3, 12, 0.2, 0.08),
    ]
}
