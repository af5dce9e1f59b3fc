use std::fmt;

use serde::{Deserialize, Serialize};

/// Schooling tiers in ascending order. The `Ord` derive gives the ordinal
/// comparison used by job requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    Elementary,
    Middle,
    High,
    College,
    Graduate,
}

impl EducationLevel {
    /// Mandatory school tier for an age, or `None` once schooling ends at 18.
    /// Ages below six map to `Some(EducationLevel::None)` so the yearly grade
    /// drift still applies to pre-schoolers.
    pub fn school_for_age(age: u32) -> Option<Self> {
        if age >= 18 {
            return None;
        }
        Some(match age {
            14.. => Self::High,
            11..=13 => Self::Middle,
            6..=10 => Self::Elementary,
            _ => Self::None,
        })
    }

    /// Short lowercase name as used in narrative log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Elementary => "elementary",
            Self::Middle => "middle",
            Self::High => "high",
            Self::College => "college",
            Self::Graduate => "graduate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::None => "Too young for school",
            Self::Elementary => "Elementary School",
            Self::Middle => "Middle School",
            Self::High => "High School",
            Self::College => "College Student",
            Self::Graduate => "Graduate Program",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_tiers_by_age() {
        assert_eq!(EducationLevel::school_for_age(0), Some(EducationLevel::None));
        assert_eq!(EducationLevel::school_for_age(5), Some(EducationLevel::None));
        assert_eq!(
            EducationLevel::school_for_age(6),
            Some(EducationLevel::Elementary)
        );
        assert_eq!(
            EducationLevel::school_for_age(10),
            Some(EducationLevel::Elementary)
        );
        assert_eq!(
            EducationLevel::school_for_age(11),
            Some(EducationLevel::Middle)
        );
        assert_eq!(
            EducationLevel::school_for_age(13),
            Some(EducationLevel::Middle)
        );
        assert_eq!(EducationLevel::school_for_age(14), Some(EducationLevel::High));
        assert_eq!(EducationLevel::school_for_age(17), Some(EducationLevel::High));
        assert_eq!(EducationLevel::school_for_age(18), None);
        assert_eq!(EducationLevel::school_for_age(40), None);
    }

    #[test]
    fn levels_are_ordinally_comparable() {
        assert!(EducationLevel::None < EducationLevel::Elementary);
        assert!(EducationLevel::High < EducationLevel::College);
        assert!(EducationLevel::College < EducationLevel::Graduate);
    }
}
