/// Affine transform state and sequential axis rotation
use nalgebra::Point3;

/// Translation, Euler rotation angles (radians) and uniform scale.
///
/// Translation is expressed in pre-scale model units; `apply` multiplies
/// it by the scale factor, so translation magnitude tracks the scale
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: f32,
    pub ty: f32,
    pub tz: f32,
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
    pub scale: f32,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            tz: 0.0,
            rx: 0.0,
            ry: 0.0,
            rz: 0.0,
            scale: 1.0,
        }
    }

    /// Scale the vertex, rotate it, then add the scale-coupled translation.
    pub fn apply(&self, v: &Point3<f32>) -> Point3<f32> {
        let scaled = Point3::new(v.x * self.scale, v.y * self.scale, v.z * self.scale);
        let rotated = rotate_xyz(&scaled, self.rx, self.ry, self.rz);
        Point3::new(
            rotated.x + self.tx * self.scale,
            rotated.y + self.ty * self.scale,
            rotated.z + self.tz * self.scale,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate about X, then Y, then Z. Each axis rotation recomputes one
/// coordinate pair from the previous stage's output, so the three
/// rotations compose sequentially rather than acting on the input
/// independently.
pub fn rotate_xyz(p: &Point3<f32>, rx: f32, ry: f32, rz: f32) -> Point3<f32> {
    let (sx, cx) = rx.sin_cos();
    let (sy, cy) = ry.sin_cos();
    let (sz, cz) = rz.sin_cos();

    let (mut x, mut y, mut z) = (p.x, p.y, p.z);
    (y, z) = (y * cx - z * sx, y * sx + z * cx);
    (x, z) = (x * cy + z * sy, -x * sy + z * cy);
    (x, y) = (x * cz - y * sz, x * sz + y * cz);
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_zero_rotation_is_identity() {
        let p = Point3::new(1.5, -2.25, 3.0);
        assert_eq!(rotate_xyz(&p, 0.0, 0.0, 0.0), p);
    }

    #[test]
    fn test_quarter_turn_about_x() {
        let p = Point3::new(0.0, 1.0, 0.0);
        let r = rotate_xyz(&p, FRAC_PI_2, 0.0, 0.0);
        assert!((r.x - 0.0).abs() < 1e-6);
        assert!((r.y - 0.0).abs() < 1e-6);
        assert!((r.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotations_compose_sequentially() {
        // The X stage leaves (1, 0, 0) alone, the Y stage then carries it
        // to -Z; independent rotations applied to the input would not.
        let p = Point3::new(1.0, 0.0, 0.0);
        let r = rotate_xyz(&p, FRAC_PI_2, FRAC_PI_2, 0.0);
        assert!((r.x - 0.0).abs() < 1e-6);
        assert!((r.y - 0.0).abs() < 1e-6);
        assert!((r.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_translation_is_scale_coupled() {
        let t = Transform {
            tx: 1.0,
            ty: -2.0,
            tz: 0.5,
            scale: 2.0,
            ..Transform::new()
        };
        let moved = t.apply(&Point3::origin());
        assert!((moved.x - 2.0).abs() < 1e-6);
        assert!((moved.y + 4.0).abs() < 1e-6);
        assert!((moved.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_scales_before_rotating() {
        let t = Transform {
            ry: FRAC_PI_2,
            scale: 3.0,
            ..Transform::new()
        };
        let moved = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!((moved.x - 0.0).abs() < 1e-5);
        assert!((moved.z + 3.0).abs() < 1e-5);
    }
}
