//! Property-based tests for the geometry core, using the `proptest` crate.

use proptest::prelude::*;

use nalgebra::{Point2, Point3, Vector3};

use geomlab_core::clip::{liang_barsky, sutherland_hodgman, ClipRect, Segment};
use geomlab_core::color::Rgb;
use geomlab_core::geometry::Mesh;
use geomlab_core::projection::Camera;
use geomlab_core::shading::{face_normal, intensity, shade, AMBIENT};
use geomlab_core::transform::rotate_xyz;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary 3D coordinate tuple in a reasonable floating-point range.
fn arb_point() -> impl Strategy<Value = (f32, f32, f32)> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
}

/// Arbitrary rotation angle in radians.
fn arb_angle() -> impl Strategy<Value = f32> {
    -std::f32::consts::PI..std::f32::consts::PI
}

/// Arbitrary rectangle contour half-extents.
fn arb_half_extent() -> impl Strategy<Value = f32> {
    1.0f32..50.0
}

fn rect_contour(half_w: f32, half_h: f32) -> Vec<Point2<f32>> {
    vec![
        Point2::new(-half_w, -half_h),
        Point2::new(half_w, -half_h),
        Point2::new(half_w, half_h),
        Point2::new(-half_w, half_h),
    ]
}

const TOL: f32 = 1e-3;

// ---------------------------------------------------------------------------
// 1. Zero rotation is the exact identity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn zero_rotation_is_identity((x, y, z) in arb_point()) {
        let p = Point3::new(x, y, z);
        prop_assert_eq!(rotate_xyz(&p, 0.0, 0.0, 0.0), p);
    }
}

// ---------------------------------------------------------------------------
// 2. Rotation preserves vector length
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rotation_preserves_length(
        (x, y, z) in arb_point(),
        rx in arb_angle(),
        ry in arb_angle(),
        rz in arb_angle(),
    ) {
        let p = Point3::new(x, y, z);
        let r = rotate_xyz(&p, rx, ry, rz);
        let before = p.coords.norm();
        let after = r.coords.norm();
        prop_assert!((before - after).abs() < TOL * (1.0 + before),
            "|p|={} became {}", before, after);
    }
}

// ---------------------------------------------------------------------------
// 3. Face normals are unit length away from degeneracy
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normals_are_unit_length(
        (ax, ay, az) in arb_point(),
        (bx, by, bz) in arb_point(),
        (cx, cy, cz) in arb_point(),
    ) {
        let a = Point3::new(ax, ay, az);
        let b = Point3::new(bx, by, bz);
        let c = Point3::new(cx, cy, cz);
        let cross = (b - a).cross(&(c - a));
        prop_assume!(cross.norm() > 1e-3);
        let n = face_normal(&a, &b, &c);
        prop_assert!((n.norm() - 1.0).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 4. Diffuse intensity and shaded channels stay in range
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn shading_stays_in_range((nx, ny, nz) in arb_point()) {
        prop_assume!(nx != 0.0 || ny != 0.0 || nz != 0.0);
        let n = Vector3::new(nx, ny, nz).normalize();
        let k = intensity(&n);
        prop_assert!((AMBIENT..=1.0).contains(&k));

        let base = Rgb::new(228, 87, 46);
        let lit = shade(base, &n);
        prop_assert!(lit.r <= base.r && lit.g <= base.g && lit.b <= base.b);
    }
}

// ---------------------------------------------------------------------------
// 5. Orthographic orbit preserves the vertical axis and vector length
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn projection_is_rigid((x, y, z) in arb_point(), angle in arb_angle()) {
        let camera = Camera::new(angle);
        let p = Point3::new(x, y, z);
        let q = camera.project(&p);
        prop_assert!((q.y - p.y).abs() < TOL);
        prop_assert!((q.coords.norm() - p.coords.norm()).abs() < TOL * (1.0 + p.coords.norm()));
    }
}

// ---------------------------------------------------------------------------
// 6. Extrusion invariants: face count, index validity, centering
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn extrusion_invariants(
        outer_w in arb_half_extent(),
        outer_h in arb_half_extent(),
        inner_frac in 0.1f32..0.8,
        depth in 0.1f32..10.0,
    ) {
        let outer = rect_contour(outer_w, outer_h);
        let inner = rect_contour(outer_w * inner_frac, outer_h * inner_frac);
        let mut mesh = Mesh::extrude(&outer, &inner, depth);

        prop_assert_eq!(mesh.faces.len(), outer.len() + inner.len() + 4);
        for face in &mesh.faces {
            prop_assert!(face.indices.len() >= 3);
            for &idx in &face.indices {
                prop_assert!(idx < mesh.vertices.len());
            }
        }

        mesh.center();
        let once = mesh.vertices.clone();
        mesh.center();
        for (a, b) in once.iter().zip(mesh.vertices.iter()) {
            prop_assert!((a - b).norm() < TOL);
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Liang-Barsky output lies inside the window and on the segment
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clipped_segment_is_inside(
        (x0, y0, _) in arb_point(),
        (x1, y1, _) in arb_point(),
    ) {
        let rect = ClipRect::new(-20.0, -20.0, 20.0, 20.0);
        let seg = Segment::new(x0, y0, x1, y1);
        if let Some(clipped) = liang_barsky(&rect, &seg) {
            for p in [clipped.a, clipped.b] {
                prop_assert!(p.x >= rect.xmin - TOL && p.x <= rect.xmax + TOL);
                prop_assert!(p.y >= rect.ymin - TOL && p.y <= rect.ymax + TOL);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 8. Sutherland-Hodgman output lies inside the window
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clipped_polygon_is_inside(
        (x0, y0, _) in arb_point(),
        (x1, y1, _) in arb_point(),
        (x2, y2, _) in arb_point(),
    ) {
        let rect = ClipRect::new(-20.0, -20.0, 20.0, 20.0);
        let subject = [
            Point2::new(x0, y0),
            Point2::new(x1, y1),
            Point2::new(x2, y2),
        ];
        for p in sutherland_hodgman(&subject, &rect) {
            prop_assert!(p.x >= rect.xmin - TOL && p.x <= rect.xmax + TOL);
            prop_assert!(p.y >= rect.ymin - TOL && p.y <= rect.ymax + TOL);
        }
    }
}
