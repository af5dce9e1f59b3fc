use serde::{Deserialize, Serialize};

/// Coarse age bracket used by event eligibility and health drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Toddler,
    Child,
    Teen,
    YoungAdult,
    Adult,
    Elder,
}

impl LifeStage {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=3 => Self::Toddler,
            4..=12 => Self::Child,
            13..=17 => Self::Teen,
            18..=25 => Self::YoungAdult,
            26..=60 => Self::Adult,
            _ => Self::Elder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_boundaries() {
        assert_eq!(LifeStage::from_age(0), LifeStage::Toddler);
        assert_eq!(LifeStage::from_age(3), LifeStage::Toddler);
        assert_eq!(LifeStage::from_age(4), LifeStage::Child);
        assert_eq!(LifeStage::from_age(12), LifeStage::Child);
        assert_eq!(LifeStage::from_age(13), LifeStage::Teen);
        assert_eq!(LifeStage::from_age(17), LifeStage::Teen);
        assert_eq!(LifeStage::from_age(18), LifeStage::YoungAdult);
        assert_eq!(LifeStage::from_age(25), LifeStage::YoungAdult);
        assert_eq!(LifeStage::from_age(26), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(60), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(61), LifeStage::Elder);
        assert_eq!(LifeStage::from_age(95), LifeStage::Elder);
    }
}
