//! The canonical `{azimuth, elevation, distance}` camera pose.
//!
//! The same type backs both the externally owned canonical pose and the
//! widget-private transient pose used during a drag, so both obey the same
//! bounds: azimuth wraps into `[0, 360)`, elevation and distance clamp.

use crate::constants::{
    AZIMUTH_PERIOD, DISTANCE_MAX, DISTANCE_MIN, ELEVATION_MAX, ELEVATION_MIN,
};
use std::fmt;

/// Which pose component a handle edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Azimuth,
    Elevation,
    Distance,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Azimuth, Axis::Elevation, Axis::Distance];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Azimuth => "azimuth",
            Axis::Elevation => "elevation",
            Axis::Distance => "distance",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Camera placement relative to the subject.
///
/// - `azimuth`: degrees around the vertical axis, circular
/// - `elevation`: degrees of tilt above the horizon, clamped to \[-30, 60\]
/// - `distance`: multiplier on the base orbit radius, clamped to \[0.6, 1.4\]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: 1.0,
        }
    }
}

impl Pose {
    /// Build a pose, wrapping and clamping every component into range.
    pub fn new(azimuth: f32, elevation: f32, distance: f32) -> Self {
        Self {
            azimuth,
            elevation,
            distance,
        }
        .normalized()
    }

    /// Return a copy with every component brought into its legal range.
    ///
    /// Non-finite components fall back to the default for that axis.
    pub fn normalized(self) -> Self {
        let d = Pose::default();
        Self {
            azimuth: if self.azimuth.is_finite() {
                wrap_degrees(self.azimuth)
            } else {
                d.azimuth
            },
            elevation: if self.elevation.is_finite() {
                clamp_elevation(self.elevation)
            } else {
                d.elevation
            },
            distance: if self.distance.is_finite() {
                clamp_distance(self.distance)
            } else {
                d.distance
            },
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
            Axis::Distance => self.distance,
        }
    }

    /// Replace one component, leaving the other two untouched.
    pub fn with(self, axis: Axis, value: f32) -> Self {
        let mut out = self;
        match axis {
            Axis::Azimuth => out.azimuth = value,
            Axis::Elevation => out.elevation = value,
            Axis::Distance => out.distance = value,
        }
        out.normalized()
    }

    pub fn is_within_bounds(&self) -> bool {
        (0.0..AZIMUTH_PERIOD).contains(&self.azimuth)
            && (ELEVATION_MIN..=ELEVATION_MAX).contains(&self.elevation)
            && (DISTANCE_MIN..=DISTANCE_MAX).contains(&self.distance)
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let w = deg.rem_euclid(AZIMUTH_PERIOD);
    // rem_euclid of a tiny negative value can round up to exactly 360
    if w >= AZIMUTH_PERIOD {
        0.0
    } else {
        w
    }
}

#[inline]
pub fn clamp_elevation(deg: f32) -> f32 {
    deg.clamp(ELEVATION_MIN, ELEVATION_MAX)
}

#[inline]
pub fn clamp_distance(d: f32) -> f32 {
    d.clamp(DISTANCE_MIN, DISTANCE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_and_full_turns() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert!(wrap_degrees(-1e-6) < 360.0);
    }

    #[test]
    fn non_finite_components_fall_back_to_defaults() {
        let p = Pose {
            azimuth: f32::NAN,
            elevation: f32::INFINITY,
            distance: f32::NEG_INFINITY,
        }
        .normalized();
        assert_eq!(p, Pose::default());
    }

    #[test]
    fn with_replaces_one_axis_and_normalizes() {
        let p = Pose::new(90.0, 30.0, 1.0);
        assert_eq!(p.with(Axis::Azimuth, 370.0), Pose::new(10.0, 30.0, 1.0));
        assert_eq!(p.with(Axis::Elevation, 95.0).elevation, ELEVATION_MAX);
        assert_eq!(p.with(Axis::Distance, 0.1).distance, DISTANCE_MIN);
        assert!(p.with(Axis::Elevation, -400.0).is_within_bounds());
    }

    #[test]
    fn bounds_check_rejects_raw_out_of_range_values() {
        assert!(Pose::default().is_within_bounds());
        let raw = Pose {
            azimuth: 360.0,
            elevation: 0.0,
            distance: 1.0,
        };
        assert!(!raw.is_within_bounds());
        assert!(raw.normalized().is_within_bounds());
    }
}
