/// Scene records and handles.
///
/// A Scene is an externally owned world context. Cameras and movement
/// predicates identify it through a stable SceneKey; nothing in this
/// subsystem reads world contents through the handle.

use slotmap::new_key_type;

new_key_type! {
    /// Stable, copyable handle to a Scene owned by a SceneManager.
    ///
    /// Keys remain valid while other scenes are added or removed.
    /// A key becomes stale only when its own scene is removed.
    pub struct SceneKey;
}

/// An externally owned scene record.
///
/// Carries identity (a name) for the registry and for movement
/// predicates that resolve their handle back to world data. World
/// contents live with the embedder, not here.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
}

impl Scene {
    /// Create a new scene record (internal: only via SceneManager)
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Scene name as registered with the SceneManager.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
