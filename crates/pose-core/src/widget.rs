//! The widget facade hosts talk to.
//!
//! A [`PoseWidget`] ties the fixed viewpoint, the scene and the drag state
//! machine together. The host feeds it pointer positions in NDC and a
//! viewport size; it hands back one [`Frame`] per animation tick and reports
//! every completed drag to its [`CommitSink`].

use crate::camera::Camera;
use crate::config::{ConfigError, WidgetConfig};
use crate::drag::DragController;
use crate::geometry::{scene_transforms, SceneTransforms};
use crate::picking::Ray;
use crate::pose::{Axis, Pose};
use crate::quantize::{trigger_prompt, Descriptor};
use crate::scene::Scene;
use glam::{Mat4, Vec2};

/// Receives the quantized pose once per completed drag.
pub trait CommitSink {
    fn pose_committed(&mut self, pose: Pose);
}

impl<F: FnMut(Pose)> CommitSink for F {
    fn pose_committed(&mut self, pose: Pose) {
        self(pose)
    }
}

/// What the host needs to draw one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub view_proj: Mat4,
    pub transforms: SceneTransforms,
    pub descriptor: Descriptor,
    /// Overlay text: trigger token followed by the descriptor.
    pub prompt: String,
    pub dragging: Option<Axis>,
    pub hovered: Option<Axis>,
}

pub struct PoseWidget<S: CommitSink> {
    config: WidgetConfig,
    camera: Camera,
    scene: Scene,
    drag: DragController,
    canonical: Pose,
    hovered: Option<Axis>,
    sink: S,
}

impl<S: CommitSink> PoseWidget<S> {
    pub fn new(config: WidgetConfig, initial: Pose, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = Scene::new(&config.layout);
        let drag = DragController::new(config.layout.clone(), config.distance_sensitivity);
        Ok(Self {
            camera: config.camera.clone(),
            config,
            scene,
            drag,
            canonical: initial.normalized(),
            hovered: None,
            sink,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canonical_pose(&self) -> Pose {
        self.canonical
    }

    /// Replace the owner's snapshot. An active drag keeps its own start pose
    /// and is unaffected until it ends.
    pub fn set_canonical_pose(&mut self, pose: Pose) {
        self.canonical = pose.normalized();
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn hovered(&self) -> Option<Axis> {
        self.hovered
    }

    fn ray(&self, ndc: Vec2) -> Option<Ray> {
        ndc.is_finite().then(|| self.camera.ray_from_ndc(ndc))
    }

    /// Try to start a drag at `ndc`. Returns the picked axis.
    pub fn pointer_down(&mut self, ndc: Vec2) -> Option<Axis> {
        let ray = self.ray(ndc)?;
        let axis = self.drag.pointer_down(self.canonical, ndc, &ray)?;
        self.hovered = None;
        Some(axis)
    }

    /// Drag update while dragging, hover tracking while idle. Returns whether
    /// anything visible changed.
    pub fn pointer_move(&mut self, ndc: Vec2) -> bool {
        let Some(ray) = self.ray(ndc) else {
            return false;
        };
        if self.drag.is_dragging() {
            return self.drag.pointer_move(ndc, &ray);
        }
        let hovered = self.drag.hit_test(&self.canonical, &ray);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn pointer_up(&mut self) -> Option<Pose> {
        let committed = self.drag.pointer_up()?;
        Some(self.commit(committed))
    }

    /// Pointer left the widget's control (cancel, lost capture, blur).
    pub fn pointer_cancel(&mut self) -> Option<Pose> {
        self.hovered = None;
        let committed = self.drag.cancel()?;
        Some(self.commit(committed))
    }

    fn commit(&mut self, pose: Pose) -> Pose {
        self.canonical = pose;
        self.sink.pose_committed(pose);
        pose
    }

    /// Pose currently on screen: the transient one mid-drag, otherwise the
    /// canonical snapshot.
    fn displayed_pose(&self) -> Pose {
        self.drag.transient().unwrap_or(self.canonical)
    }

    /// Recompute transforms, refresh the scene and describe the tick.
    pub fn frame(&mut self) -> Frame {
        let pose = self.displayed_pose();
        let transforms = scene_transforms(&pose, &self.config.layout);
        let dragging = self.drag.active_axis();
        self.scene.update(&transforms, dragging, self.hovered);
        Frame {
            view_proj: self.camera.view_proj(),
            transforms,
            descriptor: Descriptor::of(&pose),
            prompt: trigger_prompt(&pose),
            dragging,
            hovered: self.hovered,
        }
    }
}
