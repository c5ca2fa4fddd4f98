/// Mesh types and the contour-extrusion builder
use nalgebra::{Point2, Point3, Vector3};

/// A planar polygonal face stored as indices into the mesh vertex list,
/// wound so the cross product of its first two edges points outward from
/// the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

/// A polygonal mesh: an owned vertex list plus faces indexing into it
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Extrude a 2D contour with an interior hole into a closed solid of
    /// the given depth.
    ///
    /// Vertex layout: front outer ring (z = 0), front inner ring, back
    /// outer ring (z = depth), back inner ring. Emits one side quad per
    /// contour edge plus four capping n-gons, so the face count is
    /// `outer.len() + inner.len() + 4`. Both contours are orientation
    /// normalized first, which keeps every face outward-wound for either
    /// input orientation.
    pub fn extrude(outer: &[Point2<f32>], inner: &[Point2<f32>], depth: f32) -> Self {
        let outer = clockwise(outer);
        let inner = clockwise(inner);
        let n_outer = outer.len();
        let n_inner = inner.len();
        let back = n_outer + n_inner;

        let mut mesh = Self::with_capacity(2 * back, back + 4);
        for z in [0.0, depth] {
            for p in outer.iter().chain(inner.iter()) {
                mesh.vertices.push(Point3::new(p.x, p.y, z));
            }
        }

        // Outer side walls, front-first winding
        for i in 0..n_outer {
            let a = i;
            let b = (i + 1) % n_outer;
            mesh.add_face(Face::new(vec![a, a + back, b + back, b]));
        }
        // Hole walls: reversed order so the outward normal points into the cavity
        for i in 0..n_inner {
            let a = n_outer + i;
            let b = n_outer + (i + 1) % n_inner;
            mesh.add_face(Face::new(vec![b, b + back, a + back, a]));
        }
        // Caps: contour order on the front, reversed on the back
        mesh.add_face(Face::new((0..n_outer).collect()));
        mesh.add_face(Face::new((n_outer..back).collect()));
        mesh.add_face(Face::new((back..back + n_outer).rev().collect()));
        mesh.add_face(Face::new((back + n_outer..2 * back).rev().collect()));

        mesh
    }

    /// Built-in demonstration model: an extruded "R" glyph with a
    /// rectangular counter, centered on the origin.
    pub fn letter_r(depth: f32) -> Self {
        let glyph = [
            (0.0, 0.0),
            (0.0, 8.0),
            (5.2, 8.0),
            (5.6, 7.2),
            (5.6, 5.2),
            (2.4, 5.2),
            (5.6, 3.0),
            (3.4, 0.0),
        ];
        let counter = [(1.2, 6.9), (1.2, 5.6), (3.6, 5.6), (3.6, 6.9)];

        let outer: Vec<Point2<f32>> = glyph.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let inner: Vec<Point2<f32>> = counter.iter().map(|&(x, y)| Point2::new(x, y)).collect();

        let mut mesh = Self::extrude(&outer, &inner, depth);
        mesh.center();
        mesh
    }

    /// Translate every vertex so the bounding-box midpoint sits at the
    /// origin. Idempotent; run once right after construction.
    pub fn center(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices {
            min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        let mid: Vector3<f32> = (min.coords + max.coords) / 2.0;
        for v in &mut self.vertices {
            *v -= mid;
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Shoelace signed area; positive for counter-clockwise contours.
fn signed_area(points: &[Point2<f32>]) -> f32 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

fn clockwise(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    if signed_area(points) > 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}
