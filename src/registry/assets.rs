use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    House,
    Car,
    Collectible,
}

/// A purchasable asset. Ownership stores a copy of the definition, so a
/// bought asset keeps its terms even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDef {
    pub id: String,
    pub kind: AssetKind,
    pub name: String,
    pub price: f64,
    pub yearly_cost: f64,
    pub happiness_bonus: i32,
    /// Cars only.
    pub breakdown_risk: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    pub houses: Vec<AssetDef>,
    pub cars: Vec<AssetDef>,
    pub collectibles: Vec<AssetDef>,
}

impl AssetCatalog {
    pub fn iter_all(&self) -> impl Iterator<Item = &AssetDef> {
        self.houses
            .iter()
            .chain(self.cars.iter())
            .chain(self.collectibles.iter())
    }

    pub fn find(&self, id: &str) -> Option<&AssetDef> {
        self.iter_all().find(|a| a.id == id)
    }
}

fn house(id: &str, name: &str, price: f64, yearly_cost: f64, happiness_bonus: i32) -> AssetDef {
    AssetDef {
        id: id.to_string(),
        kind: AssetKind::House,
        name: name.to_string(),
        price,
        yearly_cost,
        happiness_bonus,
        breakdown_risk: None,
    }
}

fn car(
    id: &str,
    name: &str,
    price: f64,
    yearly_cost: f64,
    happiness_bonus: i32,
    breakdown_risk: f64,
) -> AssetDef {
    AssetDef {
        id: id.to_string(),
        kind: AssetKind::Car,
        name: name.to_string(),
        price,
        yearly_cost,
        happiness_bonus,
        breakdown_risk: Some(breakdown_risk),
    }
}

fn collectible(id: &str, name: &str, price: f64, yearly_cost: f64, happiness_bonus: i32) -> AssetDef {
    AssetDef {
        id: id.to_string(),
        kind: AssetKind::Collectible,
        name: name.to_string(),
        price,
        yearly_cost,
        happiness_bonus,
        breakdown_risk: None,
    }
}

pub fn builtin_assets() -> AssetCatalog {
    AssetCatalog {
        houses: vec![
            house("tiny_apartment", "Tiny Apartment", 25_000.0, 1_500.0, 3),
            house("suburban_home", "Suburban Home", 120_000.0, 4_500.0, 8),
            house("coastal_villa", "Coastal Villa", 450_000.0, 12_000.0, 15),
        ],
        cars: vec![
            car("used_hatchback", "Used Hatchback", 6_000.0, 800.0, 2, 0.15),
            car("family_sedan", "Family Sedan", 22_000.0, 1_500.0, 4, 0.08),
            car(
                "electric_roadster",
                "Electric Roadster",
                95_000.0,
                3_500.0,
                9,
                0.04,
            ),
        ],
        collectibles: vec![
            collectible("lucky_charm", "Lucky Charm", 500.0, 0.0, 1),
            collectible("vintage_guitar", "Vintage Guitar", 4_500.0, 60.0, 4),
            collectible("rare_comic", "Rare Comic", 12_000.0, 0.0, 6),
        ],
    }
}
