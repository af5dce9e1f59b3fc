//! Starting-world generation: the newborn player, their family, and the
//! initial bonds between them.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::{Mut, World};
use rand::Rng;

use crate::ecs::components::{
    Bond, CareerState, EducationState, HistoryLog, Identity, Illnesses, NpcProfile, OwnedAssets,
    Relationships, Stats, Vitals, Wallet,
};
use crate::ecs::resources::WorldgenRng;
use crate::ecs::spawn::{PlayerBundleData, spawn_npc, spawn_player};
use crate::model::RelationKind;
use crate::random::{pick_uniform, range_int};

const FIRST_NAMES: &[&str] = &[
    "Alex", "Bailey", "Casey", "Drew", "Emery", "Harper", "Jordan", "Kai", "Logan", "Mika", "Nova",
];
const LAST_NAMES: &[&str] = &[
    "Rivera", "Nguyen", "Lee", "Patel", "Lopez", "Bennett", "Diaz", "Johnson",
];
const LOCATIONS: &[&str] = &[
    "Seattle, USA",
    "Toronto, Canada",
    "Lisbon, Portugal",
    "Oslo, Norway",
];
const GENDERS: &[&str] = &["male", "female", "non-binary"];

const STARTING_CLOSENESS: i32 = 60;
const STARTING_RESPECT: i32 = 60;
const STARTING_CONFLICT: i32 = 20;

fn full_name(rng: &mut impl Rng) -> String {
    let first = pick_uniform(rng, FIRST_NAMES).copied().unwrap_or("Alex");
    let last = pick_uniform(rng, LAST_NAMES).copied().unwrap_or("Rivera");
    format!("{first} {last}")
}

/// Roll a newborn player. Stats land in fixed bands: health 70-90,
/// happiness 60-80, smarts 50-90, looks 40-80, comedy 40-80, and a starting
/// balance of 200-1200.
pub fn generate_player_data(rng: &mut impl Rng) -> PlayerBundleData {
    PlayerBundleData {
        identity: Identity {
            name: full_name(rng),
            gender: pick_uniform(rng, GENDERS)
                .copied()
                .unwrap_or("non-binary")
                .to_string(),
            location: pick_uniform(rng, LOCATIONS)
                .copied()
                .unwrap_or("Oslo, Norway")
                .to_string(),
        },
        vitals: Vitals::newborn(),
        stats: Stats {
            health: range_int(rng, 70, 90),
            happiness: range_int(rng, 60, 80),
            smarts: range_int(rng, 50, 90),
            looks: range_int(rng, 40, 80),
            comedy: range_int(rng, 40, 80),
        },
        wallet: Wallet::new(range_int(rng, 200, 1200) as f64),
        education: EducationState::default(),
        career: CareerState::default(),
        relationships: Relationships::default(),
        illnesses: Illnesses::default(),
        assets: OwnedAssets::default(),
        history: HistoryLog::default(),
    }
}

/// Mother, father, and one sibling, in that order.
pub fn generate_family(rng: &mut impl Rng) -> Vec<NpcProfile> {
    vec![
        NpcProfile::new(
            "mother",
            full_name(rng),
            range_int(rng, 25, 45) as u32,
            RelationKind::Mother,
        ),
        NpcProfile::new(
            "father",
            full_name(rng),
            range_int(rng, 25, 45) as u32,
            RelationKind::Father,
        ),
        NpcProfile::new(
            "sibling",
            full_name(rng),
            range_int(rng, 1, 15) as u32,
            RelationKind::Sibling,
        ),
    ]
}

/// One warm-but-imperfect starting bond per family member.
pub fn initial_bonds(npcs: &[NpcProfile]) -> Relationships {
    Relationships(
        npcs.iter()
            .map(|npc| Bond {
                npc_id: npc.id.clone(),
                relationship_type: npc.relationship_type,
                closeness: STARTING_CLOSENESS,
                respect: STARTING_RESPECT,
                romantic: 0,
                conflict: STARTING_CONFLICT,
            })
            .collect(),
    )
}

/// Generate and spawn a fresh player plus family into the world. Returns the
/// player entity.
pub fn populate_world(world: &mut World) -> Entity {
    world.resource_scope(|world, mut rng: Mut<WorldgenRng>| {
        let rng = &mut rng.0;
        let mut data = generate_player_data(rng);
        let family = generate_family(rng);
        data.relationships = initial_bonds(&family);
        for profile in family {
            spawn_npc(world, profile);
        }
        spawn_player(world, data)
    })
}
