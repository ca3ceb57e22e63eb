// Host-side tests for GPU uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use glam::Mat4;
use pose_core::*;
use uniforms::*;

const STRIDE: usize = 256;

fn scene() -> Scene {
    Scene::new(&SceneLayout::default())
}

#[test]
fn uniform_structs_fit_the_dynamic_offset_stride() {
    assert!(std::mem::size_of::<ObjectUniform>() <= STRIDE);
    assert_eq!(std::mem::size_of::<ObjectUniform>() % 16, 0);
    assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
}

#[test]
fn srgb_conversion_hits_endpoints_and_darkens_midtones() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    let mid = srgb_to_linear(0.5);
    assert!(mid > 0.2 && mid < 0.22, "{}", mid);
}

#[test]
fn globals_carry_light_direction_and_intensities() {
    let lighting = Lighting::default();
    let g = globals(Mat4::IDENTITY, &lighting);
    assert_eq!(g.view_proj, Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(g.light[3], lighting.directional);
    assert_eq!(g.ambient[0], lighting.ambient);
    let d = glam::Vec3::new(g.light[0], g.light[1], g.light[2]);
    assert!((d.length() - 1.0).abs() < 1e-5);
}

#[test]
fn subject_plane_is_flagged_textured() {
    let s = scene();
    let subject = s.object(ObjectRole::Subject).unwrap();
    let u = object_uniform(subject);
    assert_eq!(u.params[2], 1.0);
}

#[test]
fn highlight_adds_to_emissive() {
    let mut s = scene();
    let t = scene_transforms(&Pose::default(), &SceneLayout::default());
    s.update(&t, Some(Axis::Azimuth), None);
    let handle = s.object(ObjectRole::Handle(Axis::Azimuth)).unwrap();
    let u = object_uniform(handle);
    assert!((u.params[0] - (handle.material.emissive + DRAG_EMISSIVE_BOOST)).abs() < 1e-6);
}

#[test]
fn objects_are_packed_at_stride_offsets() {
    let s = scene();
    let mut bytes = vec![0xAA; 3];
    pack_objects(&s.objects, STRIDE, &mut bytes);
    assert_eq!(bytes.len(), s.objects.len() * STRIDE);
    let size = std::mem::size_of::<ObjectUniform>();
    for (i, obj) in s.objects.iter().enumerate() {
        let at = i * STRIDE;
        let expected = object_uniform(obj);
        assert_eq!(&bytes[at..at + size], bytemuck::bytes_of(&expected));
        // padding stays zeroed
        assert!(bytes[at + size..at + STRIDE].iter().all(|&b| b == 0));
    }
}
