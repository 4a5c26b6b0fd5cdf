//! Scene registry module
//!
//! Scenes are externally owned world contexts. The view subsystem holds
//! only opaque [`SceneKey`] handles to them; a camera forwards its handle
//! to the movement predicate for identity and never reads through it.

mod scene;
mod scene_manager;

pub use scene::{Scene, SceneKey};
pub use scene_manager::SceneManager;
