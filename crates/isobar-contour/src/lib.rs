#![forbid(unsafe_code)]

//! Contour extraction: scalar field in, line segments out.
//!
//! # Role in Isobar
//! `isobar-contour` turns a sampled scalar field into contour-line geometry.
//! It owns the reusable vertex-sample grid and the marching-squares cell
//! classifier, and knows nothing about noise, time, or drawing.
//!
//! # Primary responsibilities
//! - **ValueGrid**: one f64 sample per grid vertex, resized on demand and
//!   refilled every tick.
//! - **Marching squares**: 16-case cell classification via a const edge-pair
//!   table, linear edge interpolation, and a fixed saddle policy.
//! - **Threshold sweep**: evenly spaced iso-levels spanning [-1, 1).
//!
//! # How it fits in the system
//! `isobar-render`'s scene fills a `ValueGrid` from `isobar-noise` once per
//! tick, then runs `march_grid` once per threshold, handing each emitted
//! [`Segment`] straight to the drawing surface.

pub mod grid;
pub mod march;

pub use grid::ValueGrid;
pub use march::{
    CASE_EDGES, Edge, Point, Segment, cell_case, cell_segments, march_grid, thresholds,
};
