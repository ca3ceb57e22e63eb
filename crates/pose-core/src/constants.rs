use glam::Vec3;

// Shared geometry and interaction tuning constants for the orbit widget.

// Pose bounds
pub const AZIMUTH_PERIOD: f32 = 360.0;
pub const ELEVATION_MIN: f32 = -30.0;
pub const ELEVATION_MAX: f32 = 60.0;
pub const DISTANCE_MIN: f32 = 0.6;
pub const DISTANCE_MAX: f32 = 1.4;

// Scene layout
pub const SUBJECT_CENTER: Vec3 = Vec3::new(0.0, 0.75, 0.0); // point every orbit is built around
pub const BASE_DISTANCE: f32 = 1.6; // world radius for distance multiplier 1.0
pub const AZIMUTH_RING_RADIUS: f32 = 2.4;
pub const AZIMUTH_RING_HEIGHT: f32 = 0.05; // world y of the ring plane
pub const ELEVATION_ARC_RADIUS: f32 = 1.8;
pub const ELEVATION_ARC_OFFSET_X: f32 = -0.8; // keeps the arc clear of the azimuth ring
pub const DISTANCE_HANDLE_INSET: f32 = 0.5; // distance handle sits this far inside the avatar

// Visual sizing
pub const HANDLE_RADIUS: f32 = 0.18;
pub const RING_TUBE_RADIUS: f32 = 0.04;
pub const SUBJECT_PLANE_SIZE: f32 = 1.2;
pub const AVATAR_BODY_SIZE: [f32; 3] = [0.3, 0.22, 0.38];
pub const AVATAR_LENS_OFFSET_Z: f32 = 0.26;
pub const GRID_SIZE: f32 = 8.0;
pub const GRID_DIVISIONS: u32 = 16;

// Interaction
pub const PICK_RADIUS: f32 = 0.22; // ray-sphere radius for picking, a little larger than the visual
pub const DISTANCE_DRAG_SENSITIVITY: f32 = 1.5; // distance units per NDC unit of vertical motion

// Observer viewpoint
pub const VIEW_EYE: Vec3 = Vec3::new(4.5, 3.0, 4.5);
pub const VIEW_TARGET: Vec3 = SUBJECT_CENTER;
pub const VIEW_FOVY_DEGREES: f32 = 50.0;
pub const VIEW_ZNEAR: f32 = 0.1;
pub const VIEW_ZFAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);

// Palette (sRGB hex)
pub const BACKGROUND_COLOR: u32 = 0x111827;
pub const AVATAR_BODY_COLOR: u32 = 0x3b82f6;
pub const AVATAR_LENS_COLOR: u32 = 0x1d4ed8;
pub const AZIMUTH_COLOR: u32 = 0x10b981;
pub const ELEVATION_COLOR: u32 = 0xec4899;
pub const DISTANCE_COLOR: u32 = 0xf59e0b;
pub const GRID_CENTER_COLOR: u32 = 0x374151;
pub const GRID_LINE_COLOR: u32 = 0x1f2937;
pub const PLACEHOLDER_BACKGROUND: u32 = 0x1f2937;
pub const PLACEHOLDER_DISC: u32 = 0x4b5563;

// Emissive levels
pub const HANDLE_EMISSIVE: f32 = 0.5;
pub const RING_EMISSIVE: f32 = 0.3;
pub const HOVER_EMISSIVE_BOOST: f32 = 0.35;
pub const DRAG_EMISSIVE_BOOST: f32 = 0.6;

/// Convert a `0xRRGGBB` literal to `[r, g, b]` floats in 0..1.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
