// Scene geometry, viewpoint rays and picking.

use glam::{Vec2, Vec3};
use pose_core::*;

fn approx(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}

#[test]
fn default_pose_places_avatar_in_front_of_center() {
    let layout = SceneLayout::default();
    let t = scene_transforms(&Pose::default(), &layout);
    assert!(approx(t.avatar_position, Vec3::new(0.0, 0.75, 1.6)));
    assert!(approx(t.azimuth_handle, Vec3::new(0.0, 0.05, 2.4)));
    assert!(approx(t.elevation_handle, Vec3::new(-0.8, 0.75, 1.8)));
    assert!(approx(t.distance_handle, Vec3::new(0.0, 0.75, 1.1)));
    assert_eq!(t.guide_line, [t.avatar_position, layout.center]);
}

#[test]
fn avatar_faces_the_center_for_any_pose() {
    let layout = SceneLayout::default();
    for pose in [
        Pose::new(45.0, 30.0, 1.4),
        Pose::new(270.0, -30.0, 0.6),
        Pose::new(180.0, 60.0, 1.0),
    ] {
        let t = scene_transforms(&pose, &layout);
        let forward = t.avatar_rotation * Vec3::Z;
        let expected = (layout.center - t.avatar_position).normalize();
        assert!(approx(forward, expected), "{pose:?}");
        let r = t.avatar_position.distance(layout.center);
        assert!((r - layout.base_distance * pose.distance).abs() < 1e-4);
    }
}

#[test]
fn handles_depend_only_on_their_own_axis() {
    let layout = SceneLayout::default();
    let a = scene_transforms(&Pose::new(90.0, 0.0, 1.0), &layout);
    let b = scene_transforms(&Pose::new(90.0, 30.0, 0.6), &layout);
    assert_eq!(a.azimuth_handle, b.azimuth_handle);
    let c = scene_transforms(&Pose::new(270.0, 30.0, 1.4), &layout);
    assert_eq!(b.elevation_handle, c.elevation_handle);
}

#[test]
fn distance_handle_sits_between_center_and_avatar() {
    let layout = SceneLayout::default();
    let t = scene_transforms(&Pose::new(135.0, 20.0, 0.6), &layout);
    let to_avatar = t.avatar_position - layout.center;
    let to_handle = t.distance_handle - layout.center;
    assert!(to_handle.length() < to_avatar.length());
    assert!(to_handle.normalize().dot(to_avatar.normalize()) > 0.999);
}

#[test]
fn drag_plane_angles_round_trip_through_handles() {
    let layout = SceneLayout::default();
    let t = scene_transforms(&Pose::new(300.0, 45.0, 1.0), &layout);
    assert!((layout.azimuth_at(t.azimuth_handle) - 300.0).abs() < 1e-3);
    assert!((layout.elevation_at(t.elevation_handle) - 45.0).abs() < 1e-3);
}

#[test]
fn ray_plane_rejects_parallel_and_behind() {
    let plane = Plane::horizontal(0.05);
    let down = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Y);
    let hit = ray_plane(&down, &plane).unwrap();
    assert!(approx(hit, Vec3::new(1.0, 0.05, 3.0)));
    let flat = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
    assert_eq!(ray_plane(&flat, &plane), None);
    let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert_eq!(ray_plane(&up, &plane), None);
}

#[test]
fn ray_sphere_front_miss_and_inside() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);
    let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    assert_eq!(ray_sphere(&ray, Vec3::new(0.0, 5.0, 5.0), 2.0), None);
    assert_eq!(ray_sphere(&ray, Vec3::new(0.0, 0.0, -5.0), 2.0), None);
    let inside = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
    let t = ray_sphere(&inside, Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn pick_nearest_prefers_the_closest_hit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);
    let handles = [
        (Axis::Azimuth, Vec3::new(0.0, 0.0, 6.0)),
        (Axis::Elevation, Vec3::new(0.0, 0.1, 3.0)),
        (Axis::Distance, Vec3::new(4.0, 0.0, 1.0)),
    ];
    let (axis, t) = pick_nearest(&ray, &handles, 0.22).unwrap();
    assert_eq!(axis, Axis::Elevation);
    assert!(t < 3.0);
    assert_eq!(pick_nearest(&Ray::new(Vec3::ZERO, Vec3::X), &handles[..2], 0.22), None);
}

#[test]
fn camera_ray_through_projected_point_hits_it() {
    let mut camera = Camera::default();
    camera.set_viewport(800, 450);
    let world = Vec3::new(-0.8, 1.2, 1.5);
    let ndc = camera.project(world).unwrap();
    let ray = camera.ray_from_ndc(ndc);
    assert_eq!(ray.origin, camera.eye);
    let t = (world - ray.origin).dot(ray.dir);
    assert!(ray.at(t).distance(world) < 1e-3);
}

#[test]
fn viewport_ignores_zero_sizes() {
    let mut camera = Camera::default();
    camera.set_viewport(400, 200);
    assert_eq!(camera.aspect, 2.0);
    camera.set_viewport(0, 200);
    assert_eq!(camera.aspect, 2.0);
}

#[test]
fn client_to_ndc_flips_y() {
    let rect = [10.0, 20.0, 200.0, 100.0];
    assert_eq!(ndc_from_client(Vec2::new(10.0, 20.0), rect), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(ndc_from_client(Vec2::new(210.0, 120.0), rect), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(ndc_from_client(Vec2::new(110.0, 70.0), rect), Some(Vec2::ZERO));
    assert_eq!(ndc_from_client(Vec2::new(0.0, 0.0), [0.0, 0.0, 0.0, 10.0]), None);
    assert_eq!(ndc_from_client(Vec2::new(f32::NAN, 0.0), rect), None);
}
