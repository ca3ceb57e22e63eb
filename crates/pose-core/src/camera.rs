//! The fixed observer viewpoint the gizmo scene is rendered from.
//!
//! This type intentionally avoids referencing platform-specific APIs; hosts
//! feed it the canvas aspect ratio and pointer positions in normalized device
//! coordinates.

use crate::constants::{VIEW_EYE, VIEW_FOVY_DEGREES, VIEW_TARGET, VIEW_ZFAR, VIEW_ZNEAR};
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: VIEW_EYE,
            target: VIEW_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: VIEW_FOVY_DEGREES.to_radians(),
            znear: VIEW_ZNEAR,
            zfar: VIEW_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio from a surface size; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-space ray through a point given in normalized device coordinates
    /// (x right, y up, both in \[-1, 1\]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }

    /// Project a world point to normalized device coordinates. `None` when the
    /// point is behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        (clip.w > 0.0).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

/// Convert a pointer position in client (CSS) pixels to NDC given the canvas
/// bounding rect `(left, top, width, height)`. Returns `None` for a degenerate
/// rect or non-finite input.
#[inline]
pub fn ndc_from_client(client: Vec2, rect: [f32; 4]) -> Option<Vec2> {
    let [left, top, width, height] = rect;
    if !(width > 0.0 && height > 0.0) || !client.is_finite() {
        return None;
    }
    let x = ((client.x - left) / width) * 2.0 - 1.0;
    let y = -((client.y - top) / height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}
