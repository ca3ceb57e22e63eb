//! Scene geometry builder: positions of the camera avatar and the three
//! handles as a pure function of a pose and the layout constants.

use crate::constants::{
    AZIMUTH_RING_HEIGHT, AZIMUTH_RING_RADIUS, BASE_DISTANCE, DISTANCE_HANDLE_INSET,
    ELEVATION_ARC_OFFSET_X, ELEVATION_ARC_RADIUS, HANDLE_RADIUS, PICK_RADIUS, SUBJECT_CENTER,
    SUBJECT_PLANE_SIZE,
};
use crate::picking::Plane;
use crate::pose::{Axis, Pose};
use glam::{Mat3, Quat, Vec3};

/// Fixed geometric constants the scene is laid out from.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    /// Subject center `C`; every orbit is built around it.
    pub center: Vec3,
    /// World radius `B` for a distance multiplier of 1.0.
    pub base_distance: f32,
    pub azimuth_radius: f32,
    pub azimuth_height: f32,
    pub elevation_radius: f32,
    /// Lateral (world x) offset of the elevation arc's vertical plane.
    pub elevation_offset_x: f32,
    pub distance_inset: f32,
    pub handle_radius: f32,
    pub pick_radius: f32,
    pub subject_size: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            center: SUBJECT_CENTER,
            base_distance: BASE_DISTANCE,
            azimuth_radius: AZIMUTH_RING_RADIUS,
            azimuth_height: AZIMUTH_RING_HEIGHT,
            elevation_radius: ELEVATION_ARC_RADIUS,
            elevation_offset_x: ELEVATION_ARC_OFFSET_X,
            distance_inset: DISTANCE_HANDLE_INSET,
            handle_radius: HANDLE_RADIUS,
            pick_radius: PICK_RADIUS,
            subject_size: SUBJECT_PLANE_SIZE,
        }
    }
}

impl SceneLayout {
    /// Plane the azimuth drag ray is intersected with.
    pub fn azimuth_plane(&self) -> Plane {
        Plane::horizontal(self.azimuth_height)
    }

    /// Plane the elevation drag ray is intersected with; the elevation handle
    /// lives on it for every pose.
    pub fn elevation_plane(&self) -> Plane {
        Plane::vertical_x(self.elevation_offset_x)
    }

    /// Azimuth in degrees of a point on the azimuth plane, in `[0, 360)`.
    pub fn azimuth_at(&self, hit: Vec3) -> f32 {
        let rel = hit - self.center;
        let mut az = rel.x.atan2(rel.z).to_degrees();
        if az < 0.0 {
            az += 360.0;
        }
        az
    }

    /// Unclamped elevation in degrees of a point on the elevation plane.
    pub fn elevation_at(&self, hit: Vec3) -> f32 {
        let rel = hit - self.center;
        rel.y.atan2(rel.z).to_degrees()
    }
}

/// Every per-frame transform derived from a pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransforms {
    pub avatar_position: Vec3,
    /// Rotation taking the avatar's local +Z (the lens) onto the direction of
    /// the subject center.
    pub avatar_rotation: Quat,
    pub azimuth_handle: Vec3,
    pub elevation_handle: Vec3,
    pub distance_handle: Vec3,
    /// Guide line from the avatar to the subject center.
    pub guide_line: [Vec3; 2],
}

impl SceneTransforms {
    pub fn handle(&self, axis: Axis) -> Vec3 {
        match axis {
            Axis::Azimuth => self.azimuth_handle,
            Axis::Elevation => self.elevation_handle,
            Axis::Distance => self.distance_handle,
        }
    }

    pub fn handles(&self) -> [(Axis, Vec3); 3] {
        Axis::ALL.map(|a| (a, self.handle(a)))
    }
}

/// Offset of a point at `radius` along the orbit direction (sin a·cos e,
/// sin e, cos a·cos e).
#[inline]
pub fn orbit_offset(radius: f32, azimuth_deg: f32, elevation_deg: f32) -> Vec3 {
    let (sa, ca) = azimuth_deg.to_radians().sin_cos();
    let (se, ce) = elevation_deg.to_radians().sin_cos();
    Vec3::new(radius * sa * ce, radius * se, radius * ca * ce)
}

/// Rotation whose local +Z looks from `from` towards `to`, keeping +Y as close
/// to world up as possible.
pub fn look_rotation(from: Vec3, to: Vec3) -> Quat {
    let z = (to - from).normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() < 1e-8 {
        x = Vec3::X;
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Compute all transforms for `pose`.
pub fn scene_transforms(pose: &Pose, layout: &SceneLayout) -> SceneTransforms {
    let c = layout.center;
    let d = layout.base_distance * pose.distance;
    let avatar_position = c + orbit_offset(d, pose.azimuth, pose.elevation);

    let (sa, ca) = pose.azimuth.to_radians().sin_cos();
    let azimuth_handle = Vec3::new(
        c.x + layout.azimuth_radius * sa,
        layout.azimuth_height,
        c.z + layout.azimuth_radius * ca,
    );

    let (se, ce) = pose.elevation.to_radians().sin_cos();
    let elevation_handle = Vec3::new(
        layout.elevation_offset_x,
        c.y + layout.elevation_radius * se,
        c.z + layout.elevation_radius * ce,
    );

    let distance_handle = c + orbit_offset(d - layout.distance_inset, pose.azimuth, pose.elevation);

    SceneTransforms {
        avatar_position,
        avatar_rotation: look_rotation(avatar_position, c),
        azimuth_handle,
        elevation_handle,
        distance_handle,
        guide_line: [avatar_position, c],
    }
}
