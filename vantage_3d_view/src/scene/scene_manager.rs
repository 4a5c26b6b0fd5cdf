/// Central scene registry for the view subsystem.
///
/// Owns the Scene records and hands out the stable SceneKey handles
/// that cameras attach and movement predicates receive.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::view_info;
use super::scene::{Scene, SceneKey};

/// Registry of scenes with stable keys and a name index.
///
/// Keys remain valid while other scenes are added or removed; a removed
/// scene leaves its key stale. Names are an index, not an identity:
/// re-using a name re-points the index at the newest scene while older
/// scenes stay reachable through their keys.
pub struct SceneManager {
    /// Scene records stored in a slot map for O(1) insert/remove
    scenes: SlotMap<SceneKey, Scene>,
    /// Name index pointing at the most recently created scene per name
    names: FxHashMap<String, SceneKey>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self {
            scenes: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    /// Register a new scene and return its handle.
    pub fn create_scene(&mut self, name: &str) -> SceneKey {
        let key = self.scenes.insert(Scene::new(name));
        self.names.insert(name.to_string(), key);

        view_info!("vantage3d::SceneManager", "Scene '{}' created", name);

        key
    }

    /// Remove a scene, returning its record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if the key is stale or was never
    /// issued by this manager.
    pub fn remove_scene(&mut self, key: SceneKey) -> Result<Scene> {
        let scene = self.scenes.remove(key).ok_or_else(|| {
            Error::SceneNotFound(format!("stale scene key {:?}", key))
        })?;

        // Unlink the name index only if it still points at this scene
        if self.names.get(scene.name()) == Some(&key) {
            self.names.remove(scene.name());
        }

        view_info!("vantage3d::SceneManager", "Scene '{}' removed", scene.name());

        Ok(scene)
    }

    /// Look up a scene by key.
    pub fn get(&self, key: SceneKey) -> Option<&Scene> {
        self.scenes.get(key)
    }

    /// Key of the most recently created scene with the given name.
    pub fn key_of(&self, name: &str) -> Option<SceneKey> {
        self.names.get(name).copied()
    }

    /// Number of registered scenes
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True if no scenes are registered
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
