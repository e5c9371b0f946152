#![forbid(unsafe_code)]

//! Headless surface for CI testing.
//!
//! [`RecordingSurface`] implements [`Surface`] by recording every draw call
//! instead of rasterizing. It is designed for:
//!
//! - **CI environments** where no real drawing target exists
//! - **Determinism checks** by comparing recorded op sequences
//! - **Pipeline verification** by asserting on the segments a scene emits
//!
//! # Example
//!
//! ```
//! use isobar_render::{ContourScene, SceneParams, RecordingSurface};
//!
//! let mut scene = ContourScene::new(SceneParams::default()).unwrap();
//! let mut surface = RecordingSurface::new(320, 240);
//! scene.render_frame(&mut surface);
//!
//! assert_eq!(surface.clear_count(), 1);
//! assert!(surface.segment_count() > 0);
//! surface.assert_segments_finite();
//! ```

use crate::color::Rgba;
use crate::surface::{Stroke, Surface};
use isobar_contour::Segment;

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear(Rgba),
    SetStroke(Stroke),
    Segment(Segment),
}

/// A surface that records draw calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Change the reported size; the next rendered tick sees the new
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Every recorded op, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded segments, in draw order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Segment(s) => Some(*s),
            _ => None,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }

    /// The color of the most recent clear, if any.
    pub fn last_clear(&self) -> Option<Rgba> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Clear(c) => Some(*c),
            _ => None,
        })
    }

    /// The most recently set stroke, if any.
    pub fn last_stroke(&self) -> Option<Stroke> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::SetStroke(s) => Some(*s),
            _ => None,
        })
    }

    /// Drop all recorded ops, keeping the size.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    // --- Assertion helpers ---

    /// Assert every recorded segment endpoint is finite.
    ///
    /// # Panics
    ///
    /// Panics naming the first offending segment.
    pub fn assert_segments_finite(&self) {
        for (i, segment) in self.segments().enumerate() {
            for p in [segment.a, segment.b] {
                assert!(
                    p.x.is_finite() && p.y.is_finite(),
                    "segment {i} has a non-finite endpoint: {segment:?}"
                );
            }
        }
    }

    /// Assert every segment endpoint lies within the surface, allowing
    /// `slack` pixels of overhang past the right/bottom edge (the sample
    /// grid covers up to one cell beyond the surface).
    ///
    /// # Panics
    ///
    /// Panics naming the first offending segment.
    pub fn assert_segments_within(&self, slack: f64) {
        let max_x = self.width as f64 + slack;
        let max_y = self.height as f64 + slack;
        for (i, segment) in self.segments().enumerate() {
            for p in [segment.a, segment.b] {
                assert!(
                    (0.0..=max_x).contains(&p.x) && (0.0..=max_y).contains(&p.y),
                    "segment {i} endpoint out of bounds ({max_x} x {max_y}): {segment:?}"
                );
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.ops.push(DrawOp::SetStroke(stroke));
    }

    fn stroke_segment(&mut self, segment: Segment) {
        self.ops.push(DrawOp::Segment(segment));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
