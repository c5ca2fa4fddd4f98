/// The per-frame transform / shade / visibility pipeline
use nalgebra::{Point2, Point3, Vector3};

use crate::color::Rgb;
use crate::geometry::{Face, Mesh};
use crate::projection::Camera;
use crate::shading::{face_normal, shade};
use crate::transform::Transform;

/// Fill and outline colors for emitted faces
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub base: Rgb,
    pub outline: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            base: Rgb::new(228, 87, 46),
            outline: Rgb::new(31, 42, 68),
        }
    }
}

/// One renderable polygon in screen-plane coordinates (y up), ready for a
/// compositing sink.
#[derive(Debug, Clone)]
pub struct FacePrimitive {
    pub points: Vec<Point2<f32>>,
    pub fill: Rgb,
    pub outline: Rgb,
}

/// Run the full pipeline for the current parameters and emit polygons
/// back-to-front.
///
/// Every vertex is transformed, then projected. Faces are shaded from
/// their pre-projection (camera-independent) geometry and ordered by mean
/// projected depth, descending, stable on ties. This is the painter's
/// approximation: centroid depth ordering only, no per-pixel visibility,
/// so faces that interpenetrate in depth may composite incorrectly.
pub fn render_mesh(
    mesh: &Mesh,
    transform: &Transform,
    camera: &Camera,
    style: &Style,
) -> Vec<FacePrimitive> {
    let world: Vec<Point3<f32>> = mesh.vertices.iter().map(|v| transform.apply(v)).collect();
    let projected: Vec<Point3<f32>> = world.iter().map(|v| camera.project(v)).collect();

    let mut order: Vec<(f32, usize)> = mesh
        .faces
        .iter()
        .enumerate()
        .map(|(i, face)| (mean_depth(face, &projected), i))
        .collect();
    order.sort_by(|a, b| b.0.total_cmp(&a.0));

    order
        .into_iter()
        .map(|(_, i)| {
            let face = &mesh.faces[i];
            let normal = match face.indices[..] {
                [a, b, c, ..] => face_normal(&world[a], &world[b], &world[c]),
                _ => Vector3::new(0.0, 0.0, 1.0),
            };
            FacePrimitive {
                points: face
                    .indices
                    .iter()
                    .map(|&idx| Point2::new(projected[idx].x, projected[idx].y))
                    .collect(),
                fill: shade(style.base, &normal),
                outline: style.outline,
            }
        })
        .collect()
}

fn mean_depth(face: &Face, projected: &[Point3<f32>]) -> f32 {
    if face.indices.is_empty() {
        return 0.0;
    }
    let sum: f32 = face.indices.iter().map(|&i| projected[i].z).sum();
    sum / face.indices.len() as f32
}
