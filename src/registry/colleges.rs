use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeDef {
    pub id: String,
    pub name: String,
    /// Tuition charged at enrollment and again every year while enrolled.
    pub cost: f64,
    pub difficulty: i32,
    pub min_grades: i32,
    pub min_smarts: i32,
}

fn college(id: &str, name: &str, cost: f64, difficulty: i32, min_grades: i32, min_smarts: i32) -> CollegeDef {
    CollegeDef {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        difficulty,
        min_grades,
        min_smarts,
    }
}

pub fn builtin_colleges() -> Vec<CollegeDef> {
    vec![
        college("general_college", "General College", 12_000.0, 40, 60, 55),
        college("culinary_school", "Culinary School", 10_000.0, 35, 55, 45),
        college("programming_school", "Programming School", 14_000.0, 60, 65, 65),
        college("medical_school", "Medical School", 22_000.0, 80, 80, 80),
        college("dental_school", "Dental School", 20_000.0, 75, 75, 75),
    ]
}
