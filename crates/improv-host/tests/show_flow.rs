//! End-to-end show flow: load a catalog from disk, run a full game
//! through the host surface, and wrap up with the final summary.

use std::fs;
use std::path::PathBuf;

use improv_game::{GameConfig, Phase, ScenarioCatalog};
use improv_host::ShowHost;

fn write_catalog(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("scenarios.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "scenario": "You are a barista serving a dragon.", "difficulty": "easy"},
            {"id": 2, "scenario": "You are a time traveler stuck on Tuesday.", "difficulty": "medium"},
            {"id": 3, "scenario": "You are a waiter whose only dish is soup.", "difficulty": "hard"},
            {"id": 4, "scenario": "You are a librarian shushing a marching band.", "difficulty": "medium"}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn full_show_from_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ScenarioCatalog::load(&write_catalog(&dir));
    assert_eq!(catalog.len(), 4);

    let mut host = ShowHost::new(catalog, GameConfig::default());

    let opening = host.start_new_round("studio-7", Some("Alice"));
    assert_eq!(opening, "Round 1 of 3: You are a barista serving a dragon.");
    host.store_mut()
        .record_performance("studio-7", "Welcome! One latte for... a dragon?");
    host.store_mut()
        .record_reaction("studio-7", "You really committed to that character!");

    let second = host.start_new_round("studio-7", None);
    assert_eq!(second, "Round 2 of 3: You are a time traveler stuck on Tuesday.");
    host.store_mut().record_reaction("studio-7", "Points for creativity?");

    let third = host.start_new_round("studio-7", None);
    assert_eq!(third, "Round 3 of 3: You are a waiter whose only dish is soup.");

    let done = host.start_new_round("studio-7", None);
    assert_eq!(
        done,
        "That's all 3 rounds! Game complete. Time for the final summary."
    );
    assert!(host.store_mut().is_game_over("studio-7"));

    let summary = host.final_summary("studio-7");
    assert!(summary.starts_with("Game Summary for Alice:\n"));
    assert!(summary.contains("Completed 3 rounds.\n"));
    assert!(summary.contains("Round 1: You are a barista serving a dragon....\n"));
    assert!(summary.contains("Your reaction: You really committed to that character!...\n"));
    assert!(summary.contains("Round 3: You are a waiter whose only dish is soup....\n"));
}

#[test]
fn missing_catalog_still_runs_a_show() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ScenarioCatalog::load(&dir.path().join("missing.json"));
    let mut host = ShowHost::new(catalog, GameConfig::default());
    assert_eq!(host.catalog().len(), 1);

    // The single fallback scenario keeps dealing for every round.
    let first = host.start_new_round("studio-1", Some("Bob"));
    assert!(first.contains("barista"));
    let second = host.start_new_round("studio-1", None);
    assert!(second.contains("barista"));
    assert!(second.starts_with("Round 2 of 3:"));
}

#[test]
fn early_end_then_restart_reuses_the_room() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ScenarioCatalog::load(&write_catalog(&dir));
    let mut host = ShowHost::new(catalog, GameConfig::default());

    host.start_new_round("studio-1", Some("Alice"));
    let confirmation = host.end_early("studio-1");
    assert_eq!(
        confirmation,
        "Game ended. Alice completed 1 out of 3 rounds. Time to wrap up!"
    );
    assert_eq!(host.store_mut().state("studio-1").phase, Phase::Done);

    // A fresh game in the same room starts over from round one.
    host.store_mut().start_game("studio-1", "Bob", 2);
    let opening = host.start_new_round("studio-1", None);
    assert_eq!(opening, "Round 1 of 2: You are a barista serving a dragon.");
    assert_eq!(host.status("studio-1"), "Player: Bob, Round: 1/2, Phase: awaiting_performance");
}
