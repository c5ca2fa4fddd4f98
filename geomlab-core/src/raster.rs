/// Incremental line and circle rasterization on an integer grid
use nalgebra::Point2;
use std::collections::HashSet;

/// Walk from `p0` to `p1` in `max(|dx|, |dy|)` parametric steps, rounding
/// each sample to the nearest cell. Consecutive duplicates are dropped;
/// zero-length input yields the single start cell.
pub fn step_line(p0: Point2<i32>, p1: Point2<i32>) -> Vec<Point2<i32>> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![p0];
    }
    let mut pts = Vec::new();
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let p = Point2::new(
            (p0.x as f32 + dx as f32 * t).round() as i32,
            (p0.y as f32 + dy as f32 * t).round() as i32,
        );
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }
    pts
}

/// DDA: accumulate floating increments of `dx/steps, dy/steps` per step.
/// Same deduplication and degenerate handling as [`step_line`].
pub fn dda_line(p0: Point2<i32>, p1: Point2<i32>) -> Vec<Point2<i32>> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![p0];
    }
    let x_inc = dx as f32 / steps as f32;
    let y_inc = dy as f32 / steps as f32;
    let mut x = p0.x as f32;
    let mut y = p0.y as f32;
    let mut pts = Vec::new();
    for _ in 0..=steps {
        let p = Point2::new(x.round() as i32, y.round() as i32);
        if pts.last() != Some(&p) {
            pts.push(p);
        }
        x += x_inc;
        y += y_inc;
    }
    pts
}

/// Classic integer-error-accumulator line; endpoint inclusive.
pub fn bresenham_line(p0: Point2<i32>, p1: Point2<i32>) -> Vec<Point2<i32>> {
    let (mut x0, mut y0) = (p0.x, p0.y);
    let (x1, y1) = (p1.x, p1.y);
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut pts = Vec::new();
    loop {
        pts.push(Point2::new(x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
    pts
}

/// Midpoint circle: generate one octant and mirror it eightfold, then
/// deduplicate preserving first-seen order.
pub fn bresenham_circle(center: Point2<i32>, radius: i32) -> Vec<Point2<i32>> {
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    let mut pts = Vec::new();
    while y >= x {
        mirror_octants(center, x, y, &mut pts);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
    let mut seen = HashSet::new();
    pts.retain(|p| seen.insert((p.x, p.y)));
    pts
}

fn mirror_octants(c: Point2<i32>, x: i32, y: i32, out: &mut Vec<Point2<i32>>) {
    out.extend([
        Point2::new(c.x + x, c.y + y),
        Point2::new(c.x - x, c.y + y),
        Point2::new(c.x + x, c.y - y),
        Point2::new(c.x - x, c.y - y),
        Point2::new(c.x + y, c.y + x),
        Point2::new(c.x - y, c.y + x),
        Point2::new(c.x + y, c.y - x),
        Point2::new(c.x - y, c.y - x),
    ]);
}
