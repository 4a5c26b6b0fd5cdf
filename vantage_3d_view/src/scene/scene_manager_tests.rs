//! Unit tests for scene_manager.rs
//!
//! Marked #[serial]: creation/removal emit log entries through the
//! global logger, which other tests may be swapping out.

use serial_test::serial;

use crate::error::Error;
use super::*;

// ============================================================================
// Creation and lookup
// ============================================================================

#[test]
#[serial]
fn test_create_scene_and_get() {
    let mut manager = SceneManager::new();
    let key = manager.create_scene("outdoor");

    let scene = manager.get(key).unwrap();
    assert_eq!(scene.name(), "outdoor");
    assert_eq!(manager.len(), 1);
    assert!(!manager.is_empty());
}

#[test]
#[serial]
fn test_key_of_finds_by_name() {
    let mut manager = SceneManager::new();
    let outdoor = manager.create_scene("outdoor");
    let cave = manager.create_scene("cave");

    assert_eq!(manager.key_of("outdoor"), Some(outdoor));
    assert_eq!(manager.key_of("cave"), Some(cave));
    assert_eq!(manager.key_of("harbor"), None);
}

#[test]
#[serial]
fn test_name_reuse_repoints_index() {
    let mut manager = SceneManager::new();
    let first = manager.create_scene("outdoor");
    let second = manager.create_scene("outdoor");

    // Both scenes stay alive; the name index points at the newest
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.key_of("outdoor"), Some(second));
    assert!(manager.get(first).is_some());
}

// ============================================================================
// Removal
// ============================================================================

#[test]
#[serial]
fn test_remove_scene_returns_record() {
    let mut manager = SceneManager::new();
    let key = manager.create_scene("outdoor");

    let removed = manager.remove_scene(key).unwrap();

    assert_eq!(removed.name(), "outdoor");
    assert!(manager.get(key).is_none());
    assert_eq!(manager.key_of("outdoor"), None);
    assert!(manager.is_empty());
}

#[test]
#[serial]
fn test_remove_scene_twice_fails() {
    let mut manager = SceneManager::new();
    let key = manager.create_scene("outdoor");

    manager.remove_scene(key).unwrap();
    let result = manager.remove_scene(key);

    assert!(matches!(result, Err(Error::SceneNotFound(_))));
}

#[test]
#[serial]
fn test_remove_keeps_repointed_name_index() {
    let mut manager = SceneManager::new();
    let first = manager.create_scene("outdoor");
    let second = manager.create_scene("outdoor");

    // Removing the shadowed scene must not unlink the newer index entry
    manager.remove_scene(first).unwrap();

    assert_eq!(manager.key_of("outdoor"), Some(second));
    assert!(manager.get(second).is_some());
}

// ============================================================================
// Default
// ============================================================================

#[test]
#[serial]
fn test_default_is_empty() {
    let manager = SceneManager::default();

    assert!(manager.is_empty());
    assert_eq!(manager.len(), 0);
}
