/// Camera: viewpoint state and navigation.
///
/// Holds the observer's eye, up and look-at points and derives the
/// orthonormal viewing basis (U right, V up, W back) from them. A
/// renderer reads eye/basis/view-plane distance/zoom each frame to build
/// rays; navigation operations mutate the state in place and keep the
/// basis consistent.

use std::fmt;

use glam::Vec3;

use crate::scene::SceneKey;
use super::predicate::{AllowAll, MovementPredicate};

/// Distance from the eye to the projection plane for a new camera.
pub const DEFAULT_VIEW_PLANE_DISTANCE: f32 = 800.0;

/// GPU-ready snapshot of the full camera state.
///
/// Field order matches the flat layout a renderer consumes: eye, up,
/// look-at, basis U/V/W, view-plane distance, zoom (20 floats, 80
/// bytes, no padding). Upload with `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraBlock {
    pub eye: [f32; 3],
    pub up: [f32; 3],
    pub look_at: [f32; 3],
    pub basis_u: [f32; 3],
    pub basis_v: [f32; 3],
    pub basis_w: [f32; 3],
    pub view_plane_distance: f32,
    pub zoom: f32,
}

/// Viewpoint state with a derived orthonormal basis.
///
/// The basis vectors are derived state: clients never set them directly;
/// they are recomputed from eye/look-at/up. The eye must differ from the
/// look-at point and up must not be parallel to the viewing direction,
/// or the basis degenerates to NaN/Inf (accepted, not corrected).
///
/// A camera is owned and driven by a single caller; sharing one across
/// threads must be serialized externally.
pub struct Camera {
    eye: Vec3,
    up: Vec3,
    look_at: Vec3,
    basis_u: Vec3,
    basis_v: Vec3,
    basis_w: Vec3,
    view_plane_distance: f32,
    zoom: f32,
    predicate: Box<dyn MovementPredicate>,
    scene: Option<SceneKey>,
}

impl Camera {
    /// Create a camera with the default allow-all movement policy.
    ///
    /// Starts at eye (500, 0, 500) looking at the origin with up
    /// (0, 1, 0); the basis is computed once here.
    pub fn new() -> Self {
        Self::with_predicate(AllowAll)
    }

    /// Create a camera with a custom movement predicate.
    ///
    /// The predicate is consulted by [`Self::set_eye`],
    /// [`Self::move_backward`] and [`Self::move_left`]; it cannot be
    /// replaced after construction.
    pub fn with_predicate<P: MovementPredicate + 'static>(predicate: P) -> Self {
        let mut camera = Self {
            eye: Vec3::new(500.0, 0.0, 500.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, 0.0),
            basis_u: Vec3::ZERO,
            basis_v: Vec3::ZERO,
            basis_w: Vec3::ZERO,
            view_plane_distance: DEFAULT_VIEW_PLANE_DISTANCE,
            zoom: 1.0,
            predicate: Box::new(predicate),
            scene: None,
        };
        camera.recompute_basis();
        camera
    }

    // ===== GETTERS =====

    /// Observer position in world space.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Reference up direction. Need not be unit length.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World-space point the camera is oriented toward.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Right basis vector of the view frame (derived).
    pub fn basis_u(&self) -> Vec3 {
        self.basis_u
    }

    /// Up basis vector of the view frame (derived).
    pub fn basis_v(&self) -> Vec3 {
        self.basis_v
    }

    /// Back basis vector of the view frame (derived).
    pub fn basis_w(&self) -> Vec3 {
        self.basis_w
    }

    /// Distance from the eye to the projection plane along `basis_w`.
    pub fn view_plane_distance(&self) -> f32 {
        self.view_plane_distance
    }

    /// Scalar magnification factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Handle of the attached scene, if any.
    pub fn scene(&self) -> Option<SceneKey> {
        self.scene
    }

    // ===== SETTERS =====

    /// Move the eye to the given point, subject to the movement predicate.
    ///
    /// Each axis is admitted independently; denied axes keep their old
    /// value. Does NOT recompute the basis: callers that need the new
    /// frame must call [`Self::recompute_basis`] afterwards.
    pub fn set_eye(&mut self, eye: Vec3) {
        let allow = self.predicate.test(eye, self.scene);

        if allow.x {
            self.eye.x = eye.x;
        }
        if allow.y {
            self.eye.y = eye.y;
        }
        if allow.z {
            self.eye.z = eye.z;
        }
    }

    /// Set the look-at point. No predicate consulted, no basis recompute.
    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
    }

    /// Set the reference up direction. No predicate consulted, no basis
    /// recompute.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Set the view-plane distance.
    pub fn set_view_plane_distance(&mut self, distance: f32) {
        self.view_plane_distance = distance;
    }

    /// Set the zoom factor.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Attach the scene handle forwarded to the movement predicate.
    ///
    /// The camera never reads through the handle; it exists for the
    /// predicate to resolve world data.
    pub fn attach_scene(&mut self, scene: SceneKey) {
        self.scene = Some(scene);
    }

    // ===== BASIS =====

    /// Derive the orthonormal basis from the current eye/look-at/up.
    ///
    /// `basis_w = normalize(eye - look_at)`,
    /// `basis_u = normalize(up x basis_w)`,
    /// `basis_v = basis_w x basis_u` (already unit length, not
    /// renormalized).
    ///
    /// If the eye coincides with the look-at point, or up is parallel to
    /// `basis_w`, the normalizations divide by zero and the basis becomes
    /// NaN/Inf, which then propagates into subsequent frames.
    pub fn recompute_basis(&mut self) {
        self.basis_w = (self.eye - self.look_at).normalize();
        self.basis_u = self.up.cross(self.basis_w).normalize();
        self.basis_v = self.basis_w.cross(self.basis_u);
    }

    // ===== NAVIGATION =====

    /// Advance the eye along the viewing direction by `distance`,
    /// dragging the look-at point with it.
    ///
    /// The candidate point is submitted to the movement predicate; each
    /// admitted axis advances independently, so a partially denied move
    /// slides along the remaining axes. Recomputes the basis once if any
    /// axis moved. Positive distances step toward the look-at point;
    /// negative distances back away.
    pub fn move_backward(&mut self, distance: f32) {
        let direction = (self.look_at - self.eye).normalize();

        self.advance(direction * distance);
    }

    /// Strafe the eye along `up x viewing-direction` by `distance`,
    /// dragging the look-at point with it.
    ///
    /// The strafe vector is not renormalized: the step length scales
    /// with the magnitude of `up` and its angle to the viewing
    /// direction. Same per-axis admission as [`Self::move_backward`].
    pub fn move_left(&mut self, distance: f32) {
        let direction = (self.look_at - self.eye).normalize();
        let strafe = self.up.cross(direction);

        self.advance(strafe * distance);
    }

    /// Per-axis admission-gated advance shared by the move operations.
    fn advance(&mut self, delta: Vec3) {
        let candidate = self.eye + delta;
        let allow = self.predicate.test(candidate, self.scene);

        if allow.any() {
            if allow.x {
                self.eye.x = candidate.x;
                self.look_at.x += delta.x;
            }
            if allow.y {
                self.eye.y = candidate.y;
                self.look_at.y += delta.y;
            }
            if allow.z {
                self.eye.z = candidate.z;
                self.look_at.z += delta.z;
            }

            self.recompute_basis();
        }
    }

    /// Rotate the look vector by `angle` radians in the Y-Z plane.
    ///
    /// The rotated Y-Z projection is scaled back to unit length before
    /// being re-added to the eye, so the look-at point lands at unit Y-Z
    /// distance from the eye regardless of how far away it was. The X
    /// component of the look-at point is untouched. Always recomputes
    /// the basis.
    pub fn rotate_x(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();

        let y0 = self.look_at.y - self.eye.y;
        let z0 = self.look_at.z - self.eye.z;
        let y1 = y0 * cos - z0 * sin;
        let z1 = y0 * sin + z0 * cos;

        let length_recip = 1.0 / (y1 * y1 + z1 * z1).sqrt();

        self.look_at.y = y1 * length_recip + self.eye.y;
        self.look_at.z = z1 * length_recip + self.eye.z;

        self.recompute_basis();
    }

    /// Rotate the look vector by `angle` radians in the X-Z plane.
    ///
    /// Same unit-length collapse of the rotated projection as
    /// [`Self::rotate_x`]; the Y component of the look-at point is
    /// untouched. Always recomputes the basis.
    pub fn rotate_y(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();

        let x0 = self.look_at.x - self.eye.x;
        let z0 = self.look_at.z - self.eye.z;
        let x1 = x0 * cos - z0 * sin;
        let z1 = x0 * sin + z0 * cos;

        let length_recip = 1.0 / (x1 * x1 + z1 * z1).sqrt();

        self.look_at.x = x1 * length_recip + self.eye.x;
        self.look_at.z = z1 * length_recip + self.eye.z;

        self.recompute_basis();
    }

    /// Shift the look-at point vertically by `distance`.
    ///
    /// A translation of the look-at point, not a true rotation. Always
    /// recomputes the basis.
    pub fn look_down(&mut self, distance: f32) {
        self.look_at.y += distance;

        self.recompute_basis();
    }

    // ===== RENDERER VIEW =====

    /// Snapshot the full state for renderer upload.
    ///
    /// Read-only from the renderer's perspective: the block is a copy,
    /// detached from the camera.
    pub fn render_block(&self) -> CameraBlock {
        CameraBlock {
            eye: self.eye.to_array(),
            up: self.up.to_array(),
            look_at: self.look_at.to_array(),
            basis_u: self.basis_u.to_array(),
            basis_v: self.basis_v.to_array(),
            basis_w: self.basis_w.to_array(),
            view_plane_distance: self.view_plane_distance,
            zoom: self.zoom,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera: eye={}, up={}, look_at={}, basis_u={}, basis_v={}, basis_w={}, view_plane_distance={}, zoom={}",
            self.eye,
            self.up,
            self.look_at,
            self.basis_u,
            self.basis_v,
            self.basis_w,
            self.view_plane_distance,
            self.zoom
        )
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("eye", &self.eye)
            .field("up", &self.up)
            .field("look_at", &self.look_at)
            .field("basis_u", &self.basis_u)
            .field("basis_v", &self.basis_v)
            .field("basis_w", &self.basis_w)
            .field("view_plane_distance", &self.view_plane_distance)
            .field("zoom", &self.zoom)
            .field("scene", &self.scene)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
