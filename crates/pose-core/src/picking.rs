use crate::pose::Axis;
use glam::Vec3;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Points `p` with `normal · p + constant = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// Horizontal plane `y = height`.
    pub fn horizontal(height: f32) -> Self {
        Self {
            normal: Vec3::Y,
            constant: -height,
        }
    }

    /// Vertical plane `x = offset`.
    pub fn vertical_x(offset: f32) -> Self {
        Self {
            normal: Vec3::X,
            constant: -offset,
        }
    }
}

/// Intersection point of a ray with a plane. `None` when the ray runs parallel
/// to the plane or the plane lies behind the ray origin.
#[inline]
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = plane.normal.dot(ray.dir);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = -(plane.normal.dot(ray.origin) + plane.constant) / denom;
    (t >= 0.0).then(|| ray.at(t))
}

/// Distance along the ray to the first sphere hit in front of the origin.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    // origin inside the sphere
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

/// Nearest handle along the ray whose hit sphere the ray enters.
pub fn pick_nearest(ray: &Ray, handles: &[(Axis, Vec3)], radius: f32) -> Option<(Axis, f32)> {
    let mut best = None::<(Axis, f32)>;
    for &(axis, center) in handles {
        if let Some(t) = ray_sphere(ray, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((axis, t)),
            }
        }
    }
    best
}
