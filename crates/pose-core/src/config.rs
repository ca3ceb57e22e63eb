use crate::camera::Camera;
use crate::constants::{DISTANCE_DRAG_SENSITIVITY, DISTANCE_MIN};
use crate::geometry::SceneLayout;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("distance handle inset {inset} puts the handle behind the subject center (closest orbit radius {closest})")]
    InsetTooLarge { inset: f32, closest: f32 },
    #[error("camera eye and target coincide")]
    DegenerateView,
}

/// Everything a widget instance is tuned by.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub layout: SceneLayout,
    pub camera: Camera,
    /// Distance units per NDC unit of vertical pointer motion.
    pub distance_sensitivity: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            layout: SceneLayout::default(),
            camera: Camera::default(),
            distance_sensitivity: DISTANCE_DRAG_SENSITIVITY,
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        let positives = [
            ("base_distance", l.base_distance),
            ("azimuth_radius", l.azimuth_radius),
            ("elevation_radius", l.elevation_radius),
            ("handle_radius", l.handle_radius),
            ("pick_radius", l.pick_radius),
            ("subject_size", l.subject_size),
            ("distance_sensitivity", self.distance_sensitivity),
            ("fovy_radians", self.camera.fovy_radians),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let closest = l.base_distance * DISTANCE_MIN;
        if l.distance_inset >= closest {
            return Err(ConfigError::InsetTooLarge {
                inset: l.distance_inset,
                closest,
            });
        }
        if self.camera.eye.distance_squared(self.camera.target) < 1e-8 {
            return Err(ConfigError::DegenerateView);
        }
        Ok(())
    }
}
