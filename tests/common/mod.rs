use life_gen::LifeSim;

/// Advance the life `n` years, stopping early at death.
pub fn live_years(sim: &mut LifeSim, n: u32) {
    for _ in 0..n {
        if !sim.is_alive() {
            break;
        }
        sim.advance_year();
    }
}

/// All narrative lines, newest first.
pub fn log_lines(sim: &LifeSim) -> Vec<String> {
    sim.history()
        .map(|log| log.entries.iter().map(|e| e.text.clone()).collect())
        .unwrap_or_default()
}
