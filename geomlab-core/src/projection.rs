/// Orthographic camera orbiting the vertical axis
use nalgebra::Point3;

/// Viewpoint rotation about the Y axis, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub angle: f32,
}

impl Camera {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Orthographic projection: rotate the point about Y by the camera
    /// angle and return all three camera-space coordinates. Screen
    /// placement uses x/y; depth ordering uses z.
    pub fn project(&self, v: &Point3<f32>) -> Point3<f32> {
        let (sa, ca) = self.angle.sin_cos();
        Point3::new(v.x * ca + v.z * sa, v.y, -v.x * sa + v.z * ca)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0)
    }
}
