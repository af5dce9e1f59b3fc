use serde::{Deserialize, Serialize};

use crate::model::EducationLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDef {
    pub id: String,
    pub title: String,
    pub min_education: EducationLevel,
    pub min_smarts: i32,
    pub starting_salary: f64,
}

fn job(id: &str, title: &str, min_education: EducationLevel, min_smarts: i32, starting_salary: f64) -> JobDef {
    JobDef {
        id: id.to_string(),
        title: title.to_string(),
        min_education,
        min_smarts,
        starting_salary,
    }
}

pub fn builtin_jobs() -> Vec<JobDef> {
    use EducationLevel::{College, High, None as NoSchool};
    vec![
        job("cashier", "Cashier", NoSchool, 20, 18_000.0),
        job("waiter", "Waiter", NoSchool, 25, 19_500.0),
        job("line_cook", "Line Cook", NoSchool, 30, 24_000.0),
        job("office_clerk", "Office Clerk", High, 40, 28_000.0),
        job("sales_rep", "Sales Representative", High, 45, 32_000.0),
        job("teacher", "School Teacher", College, 60, 41_000.0),
        job("chef", "Head Chef", College, 50, 52_000.0),
        job("programmer", "Software Developer", College, 70, 72_000.0),
        job("dentist", "Dentist", College, 75, 98_000.0),
        job("doctor", "Physician", College, 80, 110_000.0),
    ]
}
