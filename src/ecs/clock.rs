use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource tracking elapsed in-game years.
///
/// Advances by one year per tick. The `advance_clock` system moves the clock
/// forward at the end of each tick (in `SimPhase::Last`), so systems see the
/// current year before it advances.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    pub year: u32,
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            year: 0,
            tick_count: 0,
        }
    }

    pub fn at_year(year: u32) -> Self {
        Self {
            year,
            tick_count: year as u64,
        }
    }

    /// Advance the clock by one year.
    pub fn advance(&mut self) {
        self.year += 1;
        self.tick_count += 1;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Bevy system that advances the simulation clock by one year.
/// Registered in `SimPhase::Last` so all other systems see the current
/// year before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
