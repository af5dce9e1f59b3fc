//! Snapshot persistence through the filesystem.

use life_gen::{LifeSim, SimSnapshot};

mod common;
use common::{live_years, log_lines};

#[test]
fn a_saved_life_resumes_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("life.json");

    let mut sim = LifeSim::new(404);
    live_years(&mut sim, 8);
    sim.perform_activity("play");
    let snapshot = sim.snapshot().expect("snapshot");
    snapshot.save_to_path(&path).expect("save");

    let loaded = SimSnapshot::load_from_path(&path).expect("load");
    let mut restored = LifeSim::from_snapshot(loaded);

    assert_eq!(restored.year(), sim.year());
    assert_eq!(restored.age(), sim.age());
    assert_eq!(restored.balance(), sim.balance());
    assert!(
        log_lines(&restored)
            .iter()
            .any(|line| line == "Played with toys and learned about gravity (again).")
    );

    // The restored session keeps ticking.
    restored.advance_year();
    assert_eq!(restored.age(), sim.age() + 1);
}

#[test]
fn snapshots_with_stale_ids_still_restore() {
    let mut sim = LifeSim::new(405);
    sim.advance_year();
    let mut snapshot = sim.snapshot().expect("snapshot");
    snapshot.illnesses.0.push("dragon_pox".to_string());
    snapshot.career.current_job = Some("lamplighter".to_string());

    // Unknown ids are kept but never resolve; the restored life keeps going.
    let mut restored = LifeSim::from_snapshot(snapshot);
    let report = restored.advance_year();
    assert!(restored.is_alive());
    assert!(!report.summary.is_empty());
}

#[test]
fn loading_garbage_fails_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").expect("write");

    let err = SimSnapshot::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("serialization"));
}
