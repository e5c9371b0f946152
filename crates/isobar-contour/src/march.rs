#![forbid(unsafe_code)]

//! Marching squares over a [`ValueGrid`].
//!
//! Each grid cell is classified against a threshold into one of 16 cases by
//! testing its four corners; the case selects which cell edges the contour
//! crosses, and linear interpolation places the crossing on each edge. The
//! case-to-edges mapping lives in a const lookup table so the saddle policy
//! is an explicit, testable constant rather than a branch in a switch.
//!
//! # Saddle policy
//!
//! Cases 5 and 10 (diagonal corners agree, adjacent corners disagree) are
//! genuinely ambiguous. This implementation always pairs
//! `left-top + right-bottom` for case 5 and `left-bottom + top-right` for
//! case 10. The pairing is fixed and data-independent; it can draw visually
//! disconnected contours where center-sampling would not, and that is the
//! intended output.

use crate::grid::ValueGrid;
use smallvec::SmallVec;

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A contour line segment between two points in pixel space.
///
/// Segments are ephemeral: produced per cell and handed straight to the
/// consumer, never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// One of the four edges of a grid cell.
///
/// Corner layout: `a` top-left, `b` top-right, `c` bottom-right, `d`
/// bottom-left. Top runs a-b, right b-c, bottom d-c, left a-d.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Case index -> contour segments, as (from-edge, to-edge) pairs.
///
/// Bit 0 = `a`, bit 1 = `b`, bit 2 = `c`, bit 3 = `d`; a bit is set when the
/// corner value exceeds the threshold. Cases 0 and 15 have no crossing.
/// Entries 5 and 10 encode the fixed saddle pairing (see module docs).
pub const CASE_EDGES: [&[(Edge, Edge)]; 16] = [
    &[],                                             // 0
    &[(Edge::Left, Edge::Top)],                      // 1
    &[(Edge::Top, Edge::Right)],                     // 2
    &[(Edge::Left, Edge::Right)],                    // 3
    &[(Edge::Right, Edge::Bottom)],                  // 4
    &[(Edge::Left, Edge::Top), (Edge::Right, Edge::Bottom)], // 5 (saddle)
    &[(Edge::Top, Edge::Bottom)],                    // 6
    &[(Edge::Left, Edge::Bottom)],                   // 7
    &[(Edge::Left, Edge::Bottom)],                   // 8
    &[(Edge::Top, Edge::Bottom)],                    // 9
    &[(Edge::Left, Edge::Bottom), (Edge::Top, Edge::Right)], // 10 (saddle)
    &[(Edge::Right, Edge::Bottom)],                  // 11
    &[(Edge::Left, Edge::Right)],                    // 12
    &[(Edge::Top, Edge::Right)],                     // 13
    &[(Edge::Left, Edge::Top)],                      // 14
    &[],                                             // 15
];

/// Classify a cell's corners against a threshold.
#[inline]
pub fn cell_case(a: f64, b: f64, c: f64, d: f64, threshold: f64) -> u8 {
    let mut case = 0u8;
    if a > threshold {
        case |= 1;
    }
    if b > threshold {
        case |= 2;
    }
    if c > threshold {
        case |= 4;
    }
    if d > threshold {
        case |= 8;
    }
    case
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolation parameter of the threshold crossing between two corner
/// values. A flat edge (equal corners) has no well-defined crossing; the
/// parameter clamps to the midpoint so no non-finite coordinate can escape.
#[inline]
fn crossing(v0: f64, v1: f64, threshold: f64) -> f64 {
    let denom = v1 - v0;
    if denom == 0.0 {
        0.5
    } else {
        (threshold - v0) / denom
    }
}

#[inline]
fn edge_point(
    edge: Edge,
    x: f64,
    y: f64,
    cell: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    threshold: f64,
) -> Point {
    match edge {
        Edge::Top => Point::new(lerp(x, x + cell, crossing(a, b, threshold)), y),
        Edge::Right => Point::new(x + cell, lerp(y, y + cell, crossing(b, c, threshold))),
        Edge::Bottom => Point::new(lerp(x, x + cell, crossing(d, c, threshold)), y + cell),
        Edge::Left => Point::new(x, lerp(y, y + cell, crossing(a, d, threshold))),
    }
}

/// Contour segments for a single cell with top-left corner at `(x, y)`.
///
/// `corners` is `[a, b, c, d]` in the layout documented on [`Edge`]. Returns
/// zero, one, or two segments.
pub fn cell_segments(
    x: f64,
    y: f64,
    cell: f64,
    corners: [f64; 4],
    threshold: f64,
) -> SmallVec<[Segment; 2]> {
    let [a, b, c, d] = corners;
    let case = cell_case(a, b, c, d, threshold) as usize;
    CASE_EDGES[case]
        .iter()
        .map(|&(from, to)| {
            Segment::new(
                edge_point(from, x, y, cell, a, b, c, d, threshold),
                edge_point(to, x, y, cell, a, b, c, d, threshold),
            )
        })
        .collect()
}

/// Extract one threshold's contour segments from a filled grid.
///
/// Visits every cell in row-major order and hands each segment to `emit` as
/// it is produced; nothing is buffered.
pub fn march_grid(grid: &ValueGrid, threshold: f64, mut emit: impl FnMut(Segment)) {
    let cols = grid.cols();
    let rows = grid.rows();
    if cols < 2 || rows < 2 {
        return;
    }
    let cell = grid.cell_size();
    let values = grid.values();

    for j in 0..rows - 1 {
        let y = j as f64 * cell;
        let row = j * cols;
        let next_row = row + cols;
        for i in 0..cols - 1 {
            let a = values[row + i];
            let b = values[row + i + 1];
            let c = values[next_row + i + 1];
            let d = values[next_row + i];

            let case = cell_case(a, b, c, d, threshold) as usize;
            if case == 0 || case == 15 {
                continue;
            }

            let x = i as f64 * cell;
            for &(from, to) in CASE_EDGES[case] {
                emit(Segment::new(
                    edge_point(from, x, y, cell, a, b, c, d, threshold),
                    edge_point(to, x, y, cell, a, b, c, d, threshold),
                ));
            }
        }
    }
}

/// The evenly spaced threshold sweep: `-1 + (2 / levels) * i` for
/// `i in 0..levels`.
pub fn thresholds(levels: usize) -> impl Iterator<Item = f64> {
    let step = 2.0 / levels as f64;
    (0..levels).map(move |i| -1.0 + step * i as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
