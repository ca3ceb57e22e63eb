use glam::Mat4;
use pose_core::{Lighting, SceneObject};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub light: [f32; 4],   // xyz towards the light, w intensity
    pub ambient: [f32; 4], // x intensity
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4], // emissive, lit, textured, unused
}

/// Palette colors are authored in sRGB; the surface expects linear values.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(srgb_to_linear)
}

pub fn globals(view_proj: Mat4, lighting: &Lighting) -> Globals {
    let d = lighting.direction;
    Globals {
        view_proj: view_proj.to_cols_array_2d(),
        light: [d.x, d.y, d.z, lighting.directional],
        ambient: [lighting.ambient, 0.0, 0.0, 0.0],
    }
}

pub fn object_uniform(obj: &SceneObject) -> ObjectUniform {
    let m = &obj.material;
    let [r, g, b] = linear_rgb(m.color);
    let flag = |on: bool| if on { 1.0 } else { 0.0 };
    ObjectUniform {
        model: obj.model.to_cols_array_2d(),
        color: [r, g, b, 1.0],
        params: [
            m.emissive + obj.highlight,
            flag(m.lit),
            flag(m.textured),
            0.0,
        ],
    }
}

/// Pack one uniform per object at `stride`-byte offsets for a dynamic-offset
/// binding.
pub fn pack_objects(objects: &[SceneObject], stride: usize, out: &mut Vec<u8>) {
    out.clear();
    out.resize(objects.len() * stride, 0);
    for (i, obj) in objects.iter().enumerate() {
        let u = object_uniform(obj);
        let bytes = bytemuck::bytes_of(&u);
        out[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
    }
}
