//! Tests for the progress reporter

use chaoscollage::io::progress::ProgressManager;

#[test]
fn idle_manager_ignores_updates() {
    let manager = ProgressManager::new();
    // No bar yet: advancing must be a no-op rather than a panic
    manager.advance("flip_lr".to_string());
}

#[test]
fn full_lifecycle_runs_cleanly() {
    let mut manager = ProgressManager::new();
    manager.initialize(3);
    for _ in 0..3 {
        manager.advance("flip_lr → grid".to_string());
    }
    manager.finish();
    // Finishing twice is harmless
    manager.finish();
}

#[test]
fn default_matches_new() {
    let mut manager = ProgressManager::default();
    manager.finish();
}
