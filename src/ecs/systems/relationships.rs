//! Passive relationship decay. Bonds cool off unless the player spends
//! actions on them; the counterpart NPC's mood sags along.

use bevy_app::{App, Plugin};
use bevy_ecs::query::{With, Without};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Query;

use crate::ecs::components::{Npc, NpcProfile, Player, Relationships, Vitals};
use crate::ecs::schedule::{DomainSet, SimTick};

const CLOSENESS_DECAY: i32 = 2;
const MOOD_DECAY: i32 = 1;

pub struct RelationshipsPlugin;

impl Plugin for RelationshipsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, decay_bonds.in_set(DomainSet::Relationships));
    }
}

fn decay_bonds(
    mut players: Query<(&Vitals, &mut Relationships), With<Player>>,
    mut npcs: Query<&mut NpcProfile, (With<Npc>, Without<Player>)>,
) {
    for (vitals, mut relationships) in players.iter_mut() {
        if !vitals.alive {
            continue;
        }
        for bond in &mut relationships.0 {
            bond.closeness = (bond.closeness - CLOSENESS_DECAY).max(0);
            for mut profile in npcs.iter_mut() {
                if profile.id == bond.npc_id {
                    profile.mood = (profile.mood - MOOD_DECAY).max(0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app;
    use crate::ecs::components::Bond;
    use crate::ecs::spawn::spawn_npc;
    use crate::ecs::test_helpers::{spawn_test_player, tick_years};
    use crate::model::RelationKind;

    #[test]
    fn bonds_and_moods_decay_each_year() {
        let mut app = build_sim_app(5);
        app.add_plugins(RelationshipsPlugin);
        let player = spawn_test_player(&mut app);
        let profile = NpcProfile::new("mother", "Harper Lee".to_string(), 30, RelationKind::Mother);
        spawn_npc(app.world_mut(), profile);
        app.world_mut()
            .get_mut::<Relationships>(player)
            .unwrap()
            .0
            .push(Bond {
                npc_id: "mother".to_string(),
                relationship_type: RelationKind::Mother,
                closeness: 60,
                respect: 60,
                romantic: 0,
                conflict: 20,
            });

        tick_years(&mut app, 3);

        let relationships = app.world().get::<Relationships>(player).unwrap();
        assert_eq!(relationships.bond("mother").unwrap().closeness, 54);
        let mut npcs = app.world_mut().query::<&NpcProfile>();
        let mother = npcs
            .iter(app.world())
            .find(|p| p.id == "mother")
            .unwrap();
        assert_eq!(mother.mood, 57);
    }

    #[test]
    fn closeness_floors_at_zero() {
        let mut app = build_sim_app(5);
        app.add_plugins(RelationshipsPlugin);
        let player = spawn_test_player(&mut app);
        app.world_mut()
            .get_mut::<Relationships>(player)
            .unwrap()
            .0
            .push(Bond {
                npc_id: "sibling".to_string(),
                relationship_type: RelationKind::Sibling,
                closeness: 3,
                respect: 50,
                romantic: 0,
                conflict: 10,
            });

        tick_years(&mut app, 4);

        let relationships = app.world().get::<Relationships>(player).unwrap();
        assert_eq!(relationships.bond("sibling").unwrap().closeness, 0);
    }
}
