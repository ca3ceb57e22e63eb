//! Renderer-agnostic description of the gizmo scene.
//!
//! A [`Scene`] is built once per widget instance: meshes and materials are
//! static, only model matrices and handle highlight change per frame. Hosts
//! upload `meshes` once and draw `objects` every frame.

use crate::constants::*;
use crate::geometry::{look_rotation, SceneLayout, SceneTransforms};
use crate::mesh::{self, MeshData};
use crate::pose::Axis;
use glam::{Mat4, Vec3};

/// Index into [`Scene::meshes`].
pub type MeshId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: f32,
    /// Shaded by the scene lights; unlit objects show `color` as is.
    pub lit: bool,
    /// Sampled from the subject texture instead of `color`.
    pub textured: bool,
}

impl Material {
    fn lit(hex: u32, emissive: f32) -> Self {
        Self {
            color: rgb(hex),
            emissive,
            lit: true,
            textured: false,
        }
    }

    fn unlit(hex: u32) -> Self {
        Self {
            color: rgb(hex),
            emissive: 0.0,
            lit: false,
            textured: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectRole {
    Subject,
    Grid,
    GridCenter,
    AzimuthRing,
    AvatarBody,
    AvatarLens,
    Handle(Axis),
    GuideLine,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub role: ObjectRole,
    pub mesh: MeshId,
    pub material: Material,
    pub model: Mat4,
    /// Extra emissive added on top of the material while hovered or dragged.
    pub highlight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Unit vector pointing from the scene towards the light.
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            directional: DIRECTIONAL_INTENSITY,
            direction: DIRECTIONAL_POSITION.normalize(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub meshes: Vec<MeshData>,
    pub objects: Vec<SceneObject>,
    pub lighting: Lighting,
    pub background: [f32; 3],
}

impl Scene {
    pub fn new(layout: &SceneLayout) -> Self {
        let mut meshes = Vec::new();
        let mut add = |m: MeshData| {
            meshes.push(m);
            meshes.len() - 1
        };
        let subject = add(mesh::plane(layout.subject_size, layout.subject_size));
        let grids = mesh::grid(GRID_SIZE, GRID_DIVISIONS);
        let grid_lines = add(grids.lines);
        let grid_center = add(grids.center);
        let ring = add(mesh::torus_xz(layout.azimuth_radius, RING_TUBE_RADIUS, 16, 64));
        let body = add(mesh::cuboid(AVATAR_BODY_SIZE));
        let lens = add(mesh::frustum(0.09, 0.11, 0.18, 16));
        let sphere = add(mesh::uv_sphere(layout.handle_radius, 16, 16));
        let segment = add(mesh::unit_segment());

        let object = |role, mesh, material, model| SceneObject {
            role,
            mesh,
            material,
            model,
            highlight: 0.0,
        };
        let handle_color = |axis: Axis| match axis {
            Axis::Azimuth => AZIMUTH_COLOR,
            Axis::Elevation => ELEVATION_COLOR,
            Axis::Distance => DISTANCE_COLOR,
        };

        let mut objects = vec![
            object(
                ObjectRole::Subject,
                subject,
                Material {
                    color: [1.0, 1.0, 1.0],
                    emissive: 0.0,
                    lit: false,
                    textured: true,
                },
                Mat4::from_translation(layout.center),
            ),
            object(
                ObjectRole::Grid,
                grid_lines,
                Material::unlit(GRID_LINE_COLOR),
                Mat4::IDENTITY,
            ),
            object(
                ObjectRole::GridCenter,
                grid_center,
                Material::unlit(GRID_CENTER_COLOR),
                Mat4::IDENTITY,
            ),
            object(
                ObjectRole::AzimuthRing,
                ring,
                Material::lit(AZIMUTH_COLOR, RING_EMISSIVE),
                Mat4::from_translation(Vec3::new(
                    layout.center.x,
                    layout.azimuth_height,
                    layout.center.z,
                )),
            ),
            object(
                ObjectRole::AvatarBody,
                body,
                Material::lit(AVATAR_BODY_COLOR, 0.0),
                Mat4::IDENTITY,
            ),
            object(
                ObjectRole::AvatarLens,
                lens,
                Material::lit(AVATAR_LENS_COLOR, 0.0),
                Mat4::IDENTITY,
            ),
        ];
        for axis in Axis::ALL {
            objects.push(object(
                ObjectRole::Handle(axis),
                sphere,
                Material::lit(handle_color(axis), HANDLE_EMISSIVE),
                Mat4::IDENTITY,
            ));
        }
        objects.push(object(
            ObjectRole::GuideLine,
            segment,
            Material::unlit(DISTANCE_COLOR),
            Mat4::IDENTITY,
        ));

        Self {
            meshes,
            objects,
            lighting: Lighting::default(),
            background: rgb(BACKGROUND_COLOR),
        }
    }

    pub fn object(&self, role: ObjectRole) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.role == role)
    }

    /// Rewrite the per-frame model matrices and handle highlights.
    pub fn update(&mut self, t: &SceneTransforms, dragging: Option<Axis>, hovered: Option<Axis>) {
        let avatar = Mat4::from_rotation_translation(t.avatar_rotation, t.avatar_position);
        let lens = avatar
            * Mat4::from_translation(Vec3::new(0.0, 0.0, AVATAR_LENS_OFFSET_Z))
            * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2);
        let [a, b] = t.guide_line;
        let guide = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 1.0, a.distance(b)),
            look_rotation(a, b),
            a,
        );
        for o in &mut self.objects {
            match o.role {
                ObjectRole::AvatarBody => o.model = avatar,
                ObjectRole::AvatarLens => o.model = lens,
                ObjectRole::GuideLine => o.model = guide,
                ObjectRole::Handle(axis) => {
                    o.model = Mat4::from_translation(t.handle(axis));
                    o.highlight = if dragging == Some(axis) {
                        DRAG_EMISSIVE_BOOST
                    } else if hovered == Some(axis) {
                        HOVER_EMISSIVE_BOOST
                    } else {
                        0.0
                    };
                }
                _ => {}
            }
        }
    }
}
