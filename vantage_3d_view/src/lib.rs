/*!
# Vantage3D View

Viewpoint/camera subsystem for the Vantage3D rendering engine.

This crate owns the observer's position and orientation, derives an
orthonormal viewing basis from them, and exposes the navigation
operations (strafe, rotate, look) that keep the basis consistent. A
renderer reads the camera state each frame to build rays; movement can
be vetoed per axis by a [`camera::MovementPredicate`] (collision, bounds
checking). Camera state persists in a fixed 44-byte big-endian layout.

## Architecture

- **Camera**: viewpoint state, derived basis, navigation operations
- **MovementPredicate**: per-axis movement admission strategy
- **SceneManager**: registry of externally owned scenes; cameras hold
  opaque [`scene::SceneKey`] handles only
- **Persistence**: fixed-order binary encode/decode of camera state
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;
pub mod scene;

// Main vantage3d namespace module
pub mod vantage3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: view_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
