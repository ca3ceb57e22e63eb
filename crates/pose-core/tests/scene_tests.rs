// Procedural meshes, the static scene graph and the placeholder texture.

use glam::{Mat4, Vec3};
use pose_core::mesh::{self, Topology};
use pose_core::*;

fn indices_in_range(m: &mesh::MeshData) -> bool {
    m.indices.iter().all(|&i| (i as usize) < m.vertices.len())
}

#[test]
fn meshes_are_well_formed() {
    let meshes = [
        mesh::uv_sphere(0.18, 16, 16),
        mesh::cuboid([0.3, 0.22, 0.38]),
        mesh::frustum(0.09, 0.11, 0.18, 16),
        mesh::torus_xz(2.4, 0.04, 16, 64),
        mesh::plane(1.2, 1.2),
    ];
    for m in &meshes {
        assert_eq!(m.topology, Topology::Triangles);
        assert_eq!(m.indices.len() % 3, 0);
        assert!(indices_in_range(m));
        for v in &m.vertices {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-3);
        }
    }
    let cube = mesh::cuboid([1.0, 2.0, 3.0]);
    assert_eq!((cube.vertices.len(), cube.indices.len()), (24, 36));
    for v in &cube.vertices {
        let p = Vec3::from(v.position).abs();
        assert!((p - Vec3::new(0.5, 1.0, 1.5)).abs().max_element() < 1e-6);
    }
}

#[test]
fn sphere_vertices_lie_on_the_radius() {
    let m = mesh::uv_sphere(0.5, 8, 6);
    for v in &m.vertices {
        assert!((Vec3::from(v.position).length() - 0.5).abs() < 1e-5);
    }
}

#[test]
fn grid_splits_center_lines() {
    let g = mesh::grid(8.0, 16);
    assert_eq!(g.center.topology, Topology::Lines);
    assert_eq!(g.center.indices.len(), 4);
    assert_eq!(g.lines.indices.len(), 16 * 4);
    assert!(indices_in_range(&g.lines));
    assert!(g
        .center
        .vertices
        .iter()
        .all(|v| v.position[0] == 0.0 || v.position[2] == 0.0));
}

#[test]
fn scene_has_one_object_per_role() {
    let scene = Scene::new(&SceneLayout::default());
    let roles = [
        ObjectRole::Subject,
        ObjectRole::Grid,
        ObjectRole::GridCenter,
        ObjectRole::AzimuthRing,
        ObjectRole::AvatarBody,
        ObjectRole::AvatarLens,
        ObjectRole::Handle(Axis::Azimuth),
        ObjectRole::Handle(Axis::Elevation),
        ObjectRole::Handle(Axis::Distance),
        ObjectRole::GuideLine,
    ];
    assert_eq!(scene.objects.len(), roles.len());
    for role in roles {
        let o = scene.object(role).unwrap();
        assert!(o.mesh < scene.meshes.len(), "{role:?}");
    }
    let subject = scene.object(ObjectRole::Subject).unwrap();
    assert!(subject.material.textured);
    assert_eq!(scene.background, rgb(BACKGROUND_COLOR));
}

#[test]
fn update_moves_only_dynamic_objects() {
    let layout = SceneLayout::default();
    let mut scene = Scene::new(&layout);
    let ring_before = scene.object(ObjectRole::AzimuthRing).unwrap().model;
    let t = scene_transforms(&Pose::new(90.0, 30.0, 1.4), &layout);
    scene.update(&t, Some(Axis::Distance), Some(Axis::Azimuth));

    assert_eq!(scene.object(ObjectRole::AzimuthRing).unwrap().model, ring_before);
    let handle = scene.object(ObjectRole::Handle(Axis::Elevation)).unwrap();
    assert_eq!(handle.model, Mat4::from_translation(t.elevation_handle));
    assert_eq!(handle.highlight, 0.0);
    let dragged = scene.object(ObjectRole::Handle(Axis::Distance)).unwrap();
    assert_eq!(dragged.highlight, DRAG_EMISSIVE_BOOST);
    let hovered = scene.object(ObjectRole::Handle(Axis::Azimuth)).unwrap();
    assert_eq!(hovered.highlight, HOVER_EMISSIVE_BOOST);

    let body = scene.object(ObjectRole::AvatarBody).unwrap();
    assert!(body.model.transform_point3(Vec3::ZERO).distance(t.avatar_position) < 1e-5);

    // guide line spans avatar to center
    let guide = scene.object(ObjectRole::GuideLine).unwrap().model;
    assert!(guide.transform_point3(Vec3::ZERO).distance(t.avatar_position) < 1e-4);
    assert!(guide.transform_point3(Vec3::Z).distance(layout.center) < 1e-4);
}

#[test]
fn placeholder_has_disc_on_dark_square() {
    let tex = placeholder_texture(PLACEHOLDER_SIZE);
    assert_eq!((tex.width, tex.height), (256, 256));
    assert_eq!(tex.rgba.len(), 256 * 256 * 4);
    assert_eq!(tex.pixel(0, 0), Some([0x1f, 0x29, 0x37, 0xff]));
    assert_eq!(tex.pixel(128, 128), Some([0x4b, 0x55, 0x63, 0xff]));
    assert_eq!(tex.pixel(128, 128 + 90), Some([0x1f, 0x29, 0x37, 0xff]));
    assert_eq!(tex.pixel(256, 0), None);
}

#[test]
fn texture_data_checks_buffer_size() {
    assert!(TextureData::from_rgba(2, 2, vec![0; 16]).is_some());
    assert!(TextureData::from_rgba(2, 2, vec![0; 15]).is_none());
    assert!(TextureData::from_rgba(0, 2, vec![]).is_none());
}

#[test]
fn shader_exposes_entry_points_and_bind_groups() {
    for needle in ["fn vs_main", "fn fs_main", "@group(0)", "@group(1)", "@group(2)"] {
        assert!(SCENE_WGSL.contains(needle), "missing {}", needle);
    }
}
