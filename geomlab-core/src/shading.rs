/// Face normals and Lambertian shading
use nalgebra::{Point3, Vector3};

use crate::color::{clampf, Rgb};

/// Fixed directional light. Deliberately left unnormalized; the intensity
/// clamp bounds the result.
pub const LIGHT: [f32; 3] = [0.5, 0.7, 1.0];

/// Intensity floor so back-facing geometry stays visible.
pub const AMBIENT: f32 = 0.2;

/// Normal of the plane through `a`, `b`, `c` via the cross product of the
/// edges `b - a` and `c - a`. Collinear points yield a zero cross product;
/// the sentinel `(0, 0, 1)` is returned instead of signaling an error.
pub fn face_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Vector3<f32> {
    let n = (b - a).cross(&(c - a));
    let length = n.norm();
    if length == 0.0 {
        return Vector3::new(0.0, 0.0, 1.0);
    }
    n / length
}

/// Diffuse intensity of `normal` against the fixed light, clamped to
/// `[AMBIENT, 1.0]`.
pub fn intensity(normal: &Vector3<f32>) -> f32 {
    let light = Vector3::new(LIGHT[0], LIGHT[1], LIGHT[2]);
    clampf(normal.dot(&light), AMBIENT, 1.0)
}

/// Scale each channel of `base` by the diffuse intensity for `normal`,
/// truncating to the 8-bit channel grid.
pub fn shade(base: Rgb, normal: &Vector3<f32>) -> Rgb {
    let k = intensity(normal);
    Rgb::new(
        (f32::from(base.r) * k).min(255.0) as u8,
        (f32::from(base.g) * k).min(255.0) as u8,
        (f32::from(base.b) * k).min(255.0) as u8,
    )
}
