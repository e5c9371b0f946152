#![forbid(unsafe_code)]

//! Braille dot-raster surface.
//!
//! Terminal cells can carry a 2x4 dot matrix via the Unicode Braille block
//! (U+2800..U+28FF), giving an effective pixel grid of `2 * cols` by
//! `4 * rows` dots per screen of text. [`BrailleCanvas`] exposes that dot
//! grid as a [`Surface`]: segments are plotted with Bresenham's algorithm
//! and the result renders as one string per cell row.
//!
//! Stroke width and cap are hints the dot raster cannot honor; the stroke
//! color and the clear color are retained for the presenting layer to apply
//! per frame (a text terminal colors whole cells, not dots).

use crate::color::Rgba;
use crate::surface::{Stroke, Surface};
use isobar_contour::Segment;

/// Dot bit for (dx, dy) within a cell, per the Braille encoding: dots 1-3
/// and 7 in the left column, 4-6 and 8 in the right.
const DOT_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

const CELL_W: u32 = 2;
const CELL_H: u32 = 4;

/// A monochrome dot raster renderable as Braille text.
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    /// Dot-grid dimensions (the `Surface` pixel size).
    width: u32,
    height: u32,
    /// Cell-grid dimensions.
    cols: usize,
    rows: usize,
    /// One Braille dot mask per cell, row-major.
    cells: Vec<u8>,
    stroke: Stroke,
    background: Rgba,
}

impl BrailleCanvas {
    /// Canvas with a dot grid of `width` x `height`. Zero-sized canvases
    /// are valid and draw nothing.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            stroke: Stroke::default(),
            background: Rgba::BLACK,
        };
        canvas.resize(width, height);
        canvas
    }

    /// Canvas sized for a terminal area of `cols` x `rows` cells.
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols as u32 * CELL_W, rows as u32 * CELL_H)
    }

    /// Re-dimension the dot grid, dropping all content.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cols = (width as usize).div_ceil(CELL_W as usize);
        self.rows = (height as usize).div_ceil(CELL_H as usize);
        self.cells.clear();
        self.cells.resize(self.cols * self.rows, 0);
    }

    /// Cell-grid dimensions as `(cols, rows)`.
    pub fn cell_size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Whether the dot at `(x, y)` is set. Out-of-range dots read as unset.
    pub fn dot(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        let (cx, cy) = (x as usize / CELL_W as usize, y as usize / CELL_H as usize);
        let bit = DOT_BITS[y as usize % CELL_H as usize][x as usize % CELL_W as usize];
        self.cells[cy * self.cols + cx] & bit != 0
    }

    /// Set the dot at `(x, y)`; out-of-range dots are clipped.
    pub fn set_dot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let (cx, cy) = (x as usize / CELL_W as usize, y as usize / CELL_H as usize);
        let bit = DOT_BITS[y as usize % CELL_H as usize][x as usize % CELL_W as usize];
        self.cells[cy * self.cols + cx] |= bit;
    }

    /// Render each cell row as a string of Braille characters.
    pub fn rows_text(&self) -> Vec<String> {
        (0..self.rows)
            .map(|cy| {
                let row = &self.cells[cy * self.cols..(cy + 1) * self.cols];
                row.iter()
                    .map(|&mask| {
                        // 0x2800 is the blank Braille pattern.
                        char::from_u32(0x2800 + mask as u32).unwrap_or(' ')
                    })
                    .collect()
            })
            .collect()
    }

    fn plot_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        // Bresenham, all octants.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set_dot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Surface for BrailleCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.background = color;
        self.cells.fill(0);
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    fn stroke_segment(&mut self, segment: Segment) {
        let (a, b) = (segment.a, segment.b);
        // Non-finite coordinates are undefined for a drawing surface; drop
        // the segment instead of corrupting the raster.
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        self.plot_line(
            a.x.round() as i64,
            a.y.round() as i64,
            b.x.round() as i64,
            b.y.round() as i64,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use isobar_contour::Point;

    fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn cell_grid_rounds_up() {
        let canvas = BrailleCanvas::new(5, 6);
        assert_eq!(canvas.cell_size(), (3, 2));
        assert_eq!(canvas.size(), (5, 6));

        let from_cells = BrailleCanvas::for_cells(80, 24);
        assert_eq!(from_cells.size(), (160, 96));
        assert_eq!(from_cells.cell_size(), (80, 24));
    }

    #[test]
    fn horizontal_segment_sets_a_dot_run() {
        let mut canvas = BrailleCanvas::new(8, 4);
        canvas.stroke_segment(segment(0.0, 0.0, 7.0, 0.0));
        for x in 0..8 {
            assert!(canvas.dot(x, 0), "dot {x} not set");
        }
        assert!(!canvas.dot(0, 1));
    }

    #[test]
    fn first_cell_encodes_expected_braille_char() {
        let mut canvas = BrailleCanvas::new(2, 4);
        // Left column fully set: dots 1, 2, 3, 7 -> 0x01|0x02|0x04|0x40.
        canvas.stroke_segment(segment(0.0, 0.0, 0.0, 3.0));
        let rows = canvas.rows_text();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], "\u{2847}");
    }

    #[test]
    fn diagonal_is_connected() {
        let mut canvas = BrailleCanvas::new(16, 16);
        canvas.stroke_segment(segment(0.0, 0.0, 15.0, 15.0));
        // Every column along the diagonal has a dot within one row.
        for x in 0..16i64 {
            assert!(
                canvas.dot(x, x) || canvas.dot(x, x - 1) || canvas.dot(x, x + 1),
                "gap at column {x}"
            );
        }
    }

    #[test]
    fn clear_resets_dots_and_keeps_background() {
        let mut canvas = BrailleCanvas::new(8, 8);
        canvas.stroke_segment(segment(0.0, 0.0, 7.0, 7.0));
        canvas.clear(Rgba::rgb(10, 20, 30));
        assert!(canvas.rows_text().iter().all(|r| r.chars().all(|c| c == '\u{2800}')));
        assert_eq!(canvas.background(), Rgba::rgb(10, 20, 30));
    }

    #[test]
    fn out_of_bounds_drawing_clips() {
        let mut canvas = BrailleCanvas::new(4, 4);
        canvas.stroke_segment(segment(-10.0, -10.0, 20.0, 20.0));
        assert!(canvas.dot(0, 0) || canvas.dot(1, 1));

        // Nothing outside the raster is addressable.
        assert!(!canvas.dot(-1, 0));
        assert!(!canvas.dot(0, 99));
    }

    #[test]
    fn non_finite_segments_are_dropped() {
        let mut canvas = BrailleCanvas::new(8, 8);
        canvas.stroke_segment(segment(f64::NAN, 0.0, 4.0, 4.0));
        canvas.stroke_segment(segment(0.0, f64::INFINITY, 4.0, 4.0));
        assert!(canvas.rows_text().iter().all(|r| r.chars().all(|c| c == '\u{2800}')));
    }

    #[test]
    fn zero_sized_canvas_is_inert() {
        let mut canvas = BrailleCanvas::new(0, 0);
        canvas.stroke_segment(segment(0.0, 0.0, 5.0, 5.0));
        assert!(canvas.rows_text().is_empty());
    }
}
