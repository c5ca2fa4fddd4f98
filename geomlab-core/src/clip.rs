/// Segment and polygon clipping against an axis-aligned window
use nalgebra::Point2;

/// Clip window; callers guarantee `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl ClipRect {
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }
}

/// Line segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2<f32>,
    pub b: Point2<f32>,
}

impl Segment {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            a: Point2::new(x0, y0),
            b: Point2::new(x1, y1),
        }
    }
}

/// Liang-Barsky parametric clip. Returns `None` when the segment lies
/// entirely outside the window, detected as a collapse of the parametric
/// interval (`u1 > u2`).
pub fn liang_barsky(rect: &ClipRect, seg: &Segment) -> Option<Segment> {
    let dx = seg.b.x - seg.a.x;
    let dy = seg.b.y - seg.a.y;
    let p = [-dx, dx, -dy, dy];
    let q = [
        seg.a.x - rect.xmin,
        rect.xmax - seg.a.x,
        seg.a.y - rect.ymin,
        rect.ymax - seg.a.y,
    ];
    let mut u1 = 0.0_f32;
    let mut u2 = 1.0_f32;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi == 0.0 {
            if qi < 0.0 {
                return None;
            }
            continue;
        }
        let t = -qi / pi;
        if pi < 0.0 {
            u1 = u1.max(t);
        } else {
            u2 = u2.min(t);
        }
        if u1 > u2 {
            return None;
        }
    }
    Some(Segment::new(
        seg.a.x + u1 * dx,
        seg.a.y + u1 * dy,
        seg.a.x + u2 * dx,
        seg.a.y + u2 * dy,
    ))
}

#[derive(Debug, Clone, Copy)]
enum WindowEdge {
    Left,
    Right,
    Bottom,
    Top,
}

/// Sutherland-Hodgman polygon clip: successive passes against the left,
/// right, bottom and top window edges, each consuming the previous pass's
/// output. The result may be empty when the subject lies fully outside.
pub fn sutherland_hodgman(subject: &[Point2<f32>], rect: &ClipRect) -> Vec<Point2<f32>> {
    let mut result = subject.to_vec();
    for edge in [
        WindowEdge::Left,
        WindowEdge::Right,
        WindowEdge::Bottom,
        WindowEdge::Top,
    ] {
        result = clip_edge(&result, edge, rect);
    }
    result
}

fn inside(p: &Point2<f32>, edge: WindowEdge, rect: &ClipRect) -> bool {
    match edge {
        WindowEdge::Left => p.x >= rect.xmin,
        WindowEdge::Right => p.x <= rect.xmax,
        WindowEdge::Bottom => p.y >= rect.ymin,
        WindowEdge::Top => p.y <= rect.ymax,
    }
}

fn intersect(p1: &Point2<f32>, p2: &Point2<f32>, edge: WindowEdge, rect: &ClipRect) -> Point2<f32> {
    if p1 == p2 {
        return *p1;
    }
    match edge {
        WindowEdge::Left | WindowEdge::Right => {
            let x_edge = match edge {
                WindowEdge::Left => rect.xmin,
                _ => rect.xmax,
            };
            let t = (x_edge - p1.x) / (p2.x - p1.x);
            Point2::new(x_edge, p1.y + t * (p2.y - p1.y))
        }
        WindowEdge::Bottom | WindowEdge::Top => {
            let y_edge = match edge {
                WindowEdge::Bottom => rect.ymin,
                _ => rect.ymax,
            };
            let t = (y_edge - p1.y) / (p2.y - p1.y);
            Point2::new(p1.x + t * (p2.x - p1.x), y_edge)
        }
    }
}

fn clip_edge(poly: &[Point2<f32>], edge: WindowEdge, rect: &ClipRect) -> Vec<Point2<f32>> {
    if poly.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for i in 0..poly.len() {
        let cur = poly[i];
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let cur_in = inside(&cur, edge, rect);
        let prev_in = inside(&prev, edge, rect);
        if cur_in {
            if !prev_in {
                out.push(intersect(&prev, &cur, edge, rect));
            }
            out.push(cur);
        } else if prev_in {
            out.push(intersect(&prev, &cur, edge, rect));
        }
    }
    out
}
