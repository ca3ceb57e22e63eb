// End-to-end pointer scenarios through the widget facade, with pointer
// positions derived by projecting world points through the viewpoint.

use glam::{Vec2, Vec3};
use pose_core::*;
use std::cell::RefCell;
use std::rc::Rc;

type Commits = Rc<RefCell<Vec<Pose>>>;

fn widget(initial: Pose) -> (PoseWidget<impl CommitSink>, Commits) {
    let commits: Commits = Rc::new(RefCell::new(Vec::new()));
    let sink = commits.clone();
    let mut w = PoseWidget::new(WidgetConfig::default(), initial, move |p: Pose| {
        sink.borrow_mut().push(p)
    })
    .unwrap();
    w.set_viewport(800, 450);
    (w, commits)
}

fn ndc_of<S: CommitSink>(w: &PoseWidget<S>, world: Vec3) -> Vec2 {
    w.camera().project(world).unwrap()
}

fn handle_ndc<S: CommitSink>(w: &mut PoseWidget<S>, axis: Axis) -> Vec2 {
    let pos = w.frame().transforms.handle(axis);
    ndc_of(w, pos)
}

fn ring_point(deg: f32) -> Vec3 {
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(2.4 * s, 0.05, 2.4 * c)
}

#[test]
fn idle_frame_describes_the_canonical_pose() {
    let (mut w, commits) = widget(Pose::new(10.0, 5.0, 0.95));
    let f = w.frame();
    assert_eq!(f.descriptor.to_string(), "front view eye-level shot medium shot");
    assert_eq!(f.prompt, "<sks> front view eye-level shot medium shot");
    assert_eq!(f.dragging, None);
    assert!(commits.borrow().is_empty());
}

#[test]
fn azimuth_drag_to_100_commits_90() {
    let (mut w, commits) = widget(Pose::default());
    let down = handle_ndc(&mut w, Axis::Azimuth);
    assert_eq!(w.pointer_down(down), Some(Axis::Azimuth));
    assert!(w.is_dragging());

    let target = ndc_of(&w, ring_point(100.0));
    assert!(w.pointer_move(target));
    let f = w.frame();
    assert_eq!(f.dragging, Some(Axis::Azimuth));
    assert_eq!(f.descriptor.azimuth, "right side view");
    // handle follows the transient pose
    assert!(f.transforms.azimuth_handle.distance(ring_point(100.0)) < 1e-2);

    let committed = w.pointer_up().unwrap();
    assert_eq!(committed, Pose::new(90.0, 0.0, 1.0));
    assert_eq!(*commits.borrow(), vec![Pose::new(90.0, 0.0, 1.0)]);
    assert!(!w.is_dragging());
}

#[test]
fn committed_pose_is_shown_until_the_owner_replies() {
    let (mut w, _commits) = widget(Pose::default());
    let down = handle_ndc(&mut w, Axis::Azimuth);
    w.pointer_down(down);
    let target = ndc_of(&w, ring_point(100.0));
    w.pointer_move(target);
    w.pointer_up();
    assert_eq!(w.canonical_pose().azimuth, 90.0);
    let f = w.frame();
    assert_eq!(f.descriptor.azimuth, "right side view");

    w.set_canonical_pose(Pose::new(180.0, 0.0, 1.0));
    assert_eq!(w.frame().descriptor.azimuth, "back view");
}

#[test]
fn upward_distance_drag_clamps_and_commits_wide() {
    let (mut w, commits) = widget(Pose::default());
    let down = handle_ndc(&mut w, Axis::Distance);
    assert_eq!(w.pointer_down(down), Some(Axis::Distance));

    // 0.2 NDC up at 1.5 per unit: 1.0 + 0.3
    w.pointer_move(down + Vec2::new(0.0, 0.2));
    assert_eq!(w.frame().descriptor.distance, "wide shot");
    w.pointer_move(down + Vec2::new(0.05, 0.8));
    let t = w.frame().transforms;
    let layout = SceneLayout::default();
    let r = t.avatar_position.distance(layout.center);
    assert!((r - layout.base_distance * 1.4).abs() < 1e-4);

    assert_eq!(w.pointer_up().unwrap().distance, 1.4);
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn elevation_drag_never_leaves_range() {
    let (mut w, commits) = widget(Pose::default());
    let down = handle_ndc(&mut w, Axis::Elevation);
    assert_eq!(w.pointer_down(down), Some(Axis::Elevation));
    // far above the arc on its plane
    let high = ndc_of(&w, Vec3::new(-0.8, 5.0, 0.3));
    w.pointer_move(high);
    let f = w.frame();
    assert_eq!(f.descriptor.elevation, "high-angle shot");
    assert_eq!(f.descriptor.azimuth, "front view");
    let committed = w.pointer_up().unwrap();
    assert_eq!(committed.elevation, 60.0);
    assert_eq!((committed.azimuth, committed.distance), (0.0, 1.0));
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn click_on_empty_space_emits_nothing() {
    let (mut w, commits) = widget(Pose::default());
    assert_eq!(w.pointer_down(Vec2::new(0.95, 0.95)), None);
    assert!(!w.is_dragging());
    assert_eq!(w.pointer_up(), None);
    assert!(commits.borrow().is_empty());
}

#[test]
fn cancel_mid_drag_commits_once() {
    let (mut w, commits) = widget(Pose::default());
    let down = handle_ndc(&mut w, Axis::Azimuth);
    w.pointer_down(down);
    let target = ndc_of(&w, ring_point(170.0));
    w.pointer_move(target);
    assert_eq!(w.pointer_cancel().unwrap().azimuth, 180.0);
    assert_eq!(w.pointer_cancel(), None);
    assert_eq!(w.pointer_up(), None);
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn hover_tracks_handles_while_idle_only() {
    let (mut w, _commits) = widget(Pose::default());
    let over = handle_ndc(&mut w, Axis::Elevation);
    assert!(w.pointer_move(over));
    assert_eq!(w.hovered(), Some(Axis::Elevation));
    assert!(!w.pointer_move(over));
    let f = w.frame();
    assert_eq!(f.hovered, Some(Axis::Elevation));
    let handle = w
        .scene()
        .object(ObjectRole::Handle(Axis::Elevation))
        .unwrap();
    assert!(handle.highlight > 0.0);

    w.pointer_down(over);
    assert_eq!(w.hovered(), None);
    w.pointer_up();
    w.pointer_move(Vec2::new(0.95, -0.95));
    assert_eq!(w.hovered(), None);
}

#[test]
fn non_finite_pointer_positions_are_ignored() {
    let (mut w, commits) = widget(Pose::default());
    assert_eq!(w.pointer_down(Vec2::new(f32::NAN, 0.0)), None);
    let down = handle_ndc(&mut w, Axis::Distance);
    w.pointer_down(down);
    assert!(!w.pointer_move(Vec2::new(0.0, f32::INFINITY)));
    assert_eq!(w.pointer_up().unwrap(), Pose::default());
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = WidgetConfig::default();
    config.distance_sensitivity = 0.0;
    let result = PoseWidget::new(config, Pose::default(), |_p: Pose| {});
    assert!(matches!(
        result.err(),
        Some(ConfigError::NonPositive { name: "distance_sensitivity", .. })
    ));
}
