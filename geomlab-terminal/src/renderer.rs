/// Painter's-algorithm compositor for terminal cells
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use geomlab_core::raster::bresenham_line;
use geomlab_core::render::FacePrimitive;
use geomlab_core::Rgb;
use nalgebra::Point2;
use std::io::Write;

/// Fill glyphs from dark to bright, picked by the fill color's luma
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Cell buffer that composites polygons strictly in the order given.
///
/// There is no depth buffer: callers supply faces back-to-front and later
/// faces simply overwrite earlier ones.
pub struct PainterCanvas {
    width: usize,
    height: usize,
    chars: Vec<char>,
    colors: Vec<Color>,
}

impl PainterCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            chars: vec![' '; size],
            colors: vec![Color::Reset; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.chars[y * self.width + x]
    }

    pub fn clear(&mut self) {
        self.chars.fill(' ');
        self.colors.fill(Color::Reset);
    }

    /// Composite primitives in the given order onto the cell buffer.
    ///
    /// Input coordinates are screen-plane units with y up; the origin maps
    /// to the canvas center. The x axis is stretched twofold to offset the
    /// tall aspect of terminal cells.
    pub fn compose(&mut self, primitives: &[FacePrimitive]) {
        self.clear();
        for prim in primitives {
            let cells: Vec<Point2<i32>> = prim.points.iter().map(|p| self.to_cell(p)).collect();
            self.fill_polygon(&cells, prim.fill);
            self.stroke_outline(&cells, prim.outline);
        }
    }

    fn to_cell(&self, p: &Point2<f32>) -> Point2<i32> {
        let x = self.width as f32 / 2.0 + p.x * 2.0;
        let y = self.height as f32 / 2.0 - p.y;
        Point2::new(x.round() as i32, y.round() as i32)
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.chars[idx] = ch;
            self.colors[idx] = color;
        }
    }

    /// Even-odd scanline fill over the cell-space polygon.
    fn fill_polygon(&mut self, cells: &[Point2<i32>], fill: Rgb) {
        if cells.len() < 3 {
            return;
        }
        let ch = ramp_char(fill);
        let color = Color::Rgb {
            r: fill.r,
            g: fill.g,
            b: fill.b,
        };
        let min_y = cells.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = cells
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(-1)
            .min(self.height as i32 - 1);

        for y in min_y..=max_y {
            // Half-open edge rule so shared vertices count once.
            let mut xs: Vec<f32> = Vec::new();
            for i in 0..cells.len() {
                let a = cells[i];
                let b = cells[(i + 1) % cells.len()];
                if a.y == b.y {
                    continue;
                }
                let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
                if y >= lo.y && y < hi.y {
                    let t = (y - lo.y) as f32 / (hi.y - lo.y) as f32;
                    xs.push(lo.x as f32 + t * (hi.x - lo.x) as f32);
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                let x0 = pair[0].round() as i32;
                let x1 = pair[1].round() as i32;
                for x in x0..=x1 {
                    self.set_cell(x, y, ch, color);
                }
            }
        }
    }

    fn stroke_outline(&mut self, cells: &[Point2<i32>], outline: Rgb) {
        if cells.len() < 2 {
            return;
        }
        let ch = ramp_char(outline);
        let color = Color::Rgb {
            r: outline.r,
            g: outline.g,
            b: outline.b,
        };
        for i in 0..cells.len() {
            let a = cells[i];
            let b = cells[(i + 1) % cells.len()];
            for p in bresenham_line(a, b) {
                self.set_cell(p.x, p.y, ch, color);
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.colors[idx]))?;
                writer.queue(Print(self.chars[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn ramp_char(color: Rgb) -> char {
    let luma =
        0.2126 * f32::from(color.r) + 0.7152 * f32::from(color.g) + 0.0722 * f32::from(color.b);
    let idx = (luma / 255.0 * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[idx.min(LUMINOSITY_RAMP.len() - 1)]
}
