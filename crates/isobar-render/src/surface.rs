#![forbid(unsafe_code)]

//! The drawing boundary.
//!
//! [`Surface`] is everything the contour pipeline needs from a drawable
//! target, and nothing more: known pixel dimensions, clear-to-color, a
//! current stroke style, and line segments. Any backend that can do these
//! four things (a GPU canvas, a terminal dot raster, a test recorder) can
//! host the animation.

use crate::color::Rgba;
use isobar_contour::Segment;

/// How stroked segment ends are shaped.
///
/// Dot-raster surfaces may not be able to honor this; they should treat it
/// as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stroke style for contour segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    /// Line width in pixels. Hint only for surfaces without sub-pixel
    /// rendering.
    pub width: f64,
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

/// A drawable target of known pixel dimensions.
///
/// Implementations must tolerate any finite segment coordinates, including
/// ones slightly outside the surface (the sample grid overhangs the
/// right/bottom edge by up to one cell); out-of-bounds drawing clips.
pub trait Surface {
    /// Current pixel dimensions as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with a color, discarding previous content.
    fn clear(&mut self, color: Rgba);

    /// Set the stroke style for subsequent segments.
    fn set_stroke(&mut self, stroke: Stroke);

    /// Stroke a single line segment with the current style.
    fn stroke_segment(&mut self, segment: Segment);
}
