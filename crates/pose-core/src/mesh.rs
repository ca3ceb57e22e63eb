//! Procedural meshes for the gizmo scene.
//!
//! All shapes are built around the origin in their own local space; the scene
//! places them with per-object model matrices.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    #[inline]
    fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    fn triangles() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology: Topology::Triangles,
        }
    }

    fn lines() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology: Topology::Lines,
        }
    }

    /// Append a `(cols + 1) x (rows + 1)` vertex lattice as quads.
    fn push_lattice(&mut self, cols: u32, rows: u32, mut vertex: impl FnMut(u32, u32) -> Vertex) {
        let base = self.vertices.len() as u32;
        for r in 0..=rows {
            for c in 0..=cols {
                self.vertices.push(vertex(c, r));
            }
        }
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * stride + c;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }
}

/// Sphere centered on the origin.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut mesh = MeshData::triangles();
    mesh.push_lattice(segments, rings, |c, r| {
        let u = c as f32 / segments as f32;
        let v = r as f32 / rings as f32;
        let (st, ct) = (v * PI).sin_cos();
        let (sp, cp) = (u * TAU).sin_cos();
        let n = [-cp * st, ct, sp * st];
        Vertex::new([n[0] * radius, n[1] * radius, n[2] * radius], n, [u, v])
    });
    mesh
}

/// Axis-aligned box of the given `[width, height, depth]`.
pub fn cuboid(size: [f32; 3]) -> MeshData {
    let [hx, hy, hz] = [size[0] * 0.5, size[1] * 0.5, size[2] * 0.5];
    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let half = [hx, hy, hz];
    let mut mesh = MeshData::triangles();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut p = [0.0; 3];
            for k in 0..3 {
                p[k] = (n[k] + u[k] * su + v[k] * sv) * half[k];
            }
            mesh.vertices.push(Vertex::new(
                p,
                n,
                [(su + 1.0) * 0.5, (1.0 - sv) * 0.5],
            ));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Capped cone frustum along +Y, centered on the origin.
pub fn frustum(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height.max(f32::EPSILON);
    let mut mesh = MeshData::triangles();
    mesh.push_lattice(segments, 1, |c, r| {
        let u = c as f32 / segments as f32;
        let (s, co) = (u * TAU).sin_cos();
        let radius = if r == 0 { radius_top } else { radius_bottom };
        let y = if r == 0 { half } else { -half };
        let n = glam::Vec3::new(s, slope, co).normalize();
        Vertex::new([radius * s, y, radius * co], n.to_array(), [u, r as f32])
    });
    for (y, radius, ny) in [(half, radius_top, 1.0f32), (-half, radius_bottom, -1.0)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(Vertex::new([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5]));
        for c in 0..=segments {
            let (s, co) = (c as f32 / segments as f32 * TAU).sin_cos();
            mesh.vertices.push(Vertex::new(
                [radius * s, y, radius * co],
                [0.0, ny, 0.0],
                [0.5 + 0.5 * s, 0.5 + 0.5 * co],
            ));
        }
        for c in 0..segments {
            let a = center + 1 + c;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, a + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, a + 1, a]);
            }
        }
    }
    mesh
}

/// Torus lying in the XZ plane around the Y axis.
pub fn torus_xz(major_radius: f32, tube_radius: f32, radial: u32, tubular: u32) -> MeshData {
    let radial = radial.max(3);
    let tubular = tubular.max(3);
    let mut mesh = MeshData::triangles();
    mesh.push_lattice(tubular, radial, |c, r| {
        let u = c as f32 / tubular as f32;
        let v = r as f32 / radial as f32;
        let (su, cu) = (u * TAU).sin_cos();
        let (sv, cv) = (v * TAU).sin_cos();
        let ring = major_radius + tube_radius * cv;
        let n = [cv * su, sv, cv * cu];
        Vertex::new([ring * su, tube_radius * sv, ring * cu], n, [u, v])
    });
    mesh
}

/// Unit-normal quad in the XY plane facing +Z.
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let n = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            Vertex::new([-hw, -hh, 0.0], n, [0.0, 1.0]),
            Vertex::new([hw, -hh, 0.0], n, [1.0, 1.0]),
            Vertex::new([hw, hh, 0.0], n, [1.0, 0.0]),
            Vertex::new([-hw, hh, 0.0], n, [0.0, 0.0]),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
        topology: Topology::Triangles,
    }
}

/// Floor grid on y = 0, split into the two center lines and the rest so they
/// can be tinted separately.
pub struct GridMeshes {
    pub center: MeshData,
    pub lines: MeshData,
}

pub fn grid(size: f32, divisions: u32) -> GridMeshes {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut center = MeshData::lines();
    let mut lines = MeshData::lines();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let target = if i * 2 == divisions {
            &mut center
        } else {
            &mut lines
        };
        push_line(target, [-half, 0.0, k], [half, 0.0, k]);
        push_line(target, [k, 0.0, -half], [k, 0.0, half]);
    }
    GridMeshes { center, lines }
}

/// Unit segment from the origin to +Z; stretched per frame by a model matrix.
pub fn unit_segment() -> MeshData {
    let mut mesh = MeshData::lines();
    push_line(&mut mesh, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
    mesh
}

fn push_line(mesh: &mut MeshData, a: [f32; 3], b: [f32; 3]) {
    let base = mesh.vertices.len() as u32;
    let n = [0.0, 1.0, 0.0];
    mesh.vertices.push(Vertex::new(a, n, [0.0, 0.0]));
    mesh.vertices.push(Vertex::new(b, n, [1.0, 0.0]));
    mesh.indices.extend_from_slice(&[base, base + 1]);
}
