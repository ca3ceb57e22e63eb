//! Pick and drag state machine.
//!
//! Pointer input arrives as NDC positions plus the world ray through them.
//! While idle a pointer-down picks the nearest handle; while dragging each
//! move rewrites exactly one axis of a private transient pose. Release (or a
//! cancel, which is treated the same) quantizes the transient pose and hands
//! it back as the commit.

use crate::geometry::{scene_transforms, SceneLayout};
use crate::picking::{pick_nearest, ray_plane, Ray};
use crate::pose::{clamp_distance, clamp_elevation, wrap_degrees, Axis, Pose};
use crate::quantize::quantize;
use glam::Vec2;

/// Lives between a successful pick and the release that ends it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer position at pick time, in NDC.
    pub pointer_start: Vec2,
    /// Whole pose at pick time; distance drags are relative to it.
    pub pose_at_start: Pose,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging {
        session: DragSession,
        transient: Pose,
    },
}

#[derive(Clone, Debug)]
pub struct DragController {
    layout: SceneLayout,
    distance_sensitivity: f32,
    state: DragState,
}

impl DragController {
    pub fn new(layout: SceneLayout, distance_sensitivity: f32) -> Self {
        Self {
            layout,
            distance_sensitivity,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active_axis(&self) -> Option<Axis> {
        match self.state {
            DragState::Dragging { session, .. } => Some(session.axis),
            DragState::Idle => None,
        }
    }

    pub(crate) fn transient(&self) -> Option<Pose> {
        match self.state {
            DragState::Dragging { transient, .. } => Some(transient),
            DragState::Idle => None,
        }
    }

    /// Handle under the ray for handles placed from `pose`, without changing
    /// state.
    pub fn hit_test(&self, pose: &Pose, ray: &Ray) -> Option<Axis> {
        let handles = scene_transforms(pose, &self.layout).handles();
        pick_nearest(ray, &handles, self.layout.pick_radius).map(|(axis, _)| axis)
    }

    /// Begin a drag if the ray hits a handle. Ignored while already dragging.
    pub fn pointer_down(&mut self, canonical: Pose, ndc: Vec2, ray: &Ray) -> Option<Axis> {
        if self.is_dragging() {
            return None;
        }
        let pose = canonical.normalized();
        let axis = self.hit_test(&pose, ray)?;
        self.state = DragState::Dragging {
            session: DragSession {
                axis,
                pointer_start: ndc,
                pose_at_start: pose,
            },
            transient: pose,
        };
        log::info!("[drag] begin on {} handle", axis);
        Some(axis)
    }

    /// Update the transient pose from a pointer move. Returns whether it
    /// changed; a ray that misses the drag plane leaves it as it was.
    pub fn pointer_move(&mut self, ndc: Vec2, ray: &Ray) -> bool {
        let DragState::Dragging { session, transient } = &mut self.state else {
            return false;
        };
        let start = session.pose_at_start;
        let value = match session.axis {
            Axis::Azimuth => match ray_plane(ray, &self.layout.azimuth_plane()) {
                Some(hit) => wrap_degrees(self.layout.azimuth_at(hit)),
                None => return false,
            },
            Axis::Elevation => match ray_plane(ray, &self.layout.elevation_plane()) {
                Some(hit) => clamp_elevation(self.layout.elevation_at(hit)),
                None => return false,
            },
            Axis::Distance => {
                if !ndc.y.is_finite() {
                    return false;
                }
                // screen-down displacement is subtracted, so pointer-up grows the distance
                let screen_dy = -(ndc.y - session.pointer_start.y);
                clamp_distance(start.distance - screen_dy * self.distance_sensitivity)
            }
        };
        let next = start.with(session.axis, value);
        debug_assert!(next.is_within_bounds(), "transient pose out of bounds: {:?}", next);
        let changed = next != *transient;
        *transient = next;
        changed
    }

    /// End the drag and return the quantized pose to commit. `None` when no
    /// drag was active.
    pub fn pointer_up(&mut self) -> Option<Pose> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { session, transient } => {
                let committed = quantize(transient);
                log::info!(
                    "[drag] commit {} az={} el={} dist={}",
                    session.axis,
                    committed.azimuth,
                    committed.elevation,
                    committed.distance
                );
                Some(committed)
            }
            DragState::Idle => None,
        }
    }

    /// Lost pointer capture, blur or pointercancel: commit like a release so
    /// the widget never stays stuck in a drag.
    pub fn cancel(&mut self) -> Option<Pose> {
        if self.is_dragging() {
            log::debug!("[drag] pointer lost; committing current state");
        }
        self.pointer_up()
    }
}
