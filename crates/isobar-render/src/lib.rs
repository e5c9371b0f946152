#![forbid(unsafe_code)]

//! Render: the drawing boundary and the per-frame contour scene.
//!
//! # Role in Isobar
//! `isobar-render` is where the field math meets a drawable target. It
//! defines the entire rendering boundary (a [`Surface`] that can clear
//! itself, take a stroke style, and draw line segments) and the
//! [`ContourScene`] render context that drives one animation tick from noise
//! sampling through contour extraction to stroked output.
//!
//! # Primary responsibilities
//! - **Surface**: the minimal drawing contract (size, clear, stroke style,
//!   segment).
//! - **ContourScene**: explicit per-view render context; owns the sampler,
//!   the reusable grid, the configuration, and the time accumulator.
//! - **RecordingSurface**: headless surface for CI and snapshot-style
//!   assertions.
//! - **BrailleCanvas**: dot-raster surface for terminal presentation.
//!
//! # How it fits in the system
//! A host (for example `isobar-demo`) owns a surface and calls
//! [`ContourScene::render_frame`] once per tick; resizing the surface takes
//! effect on the next tick. The scene never blocks and never touches I/O.

pub mod braille;
pub mod color;
pub mod headless;
pub mod scene;
pub mod surface;

pub use braille::BrailleCanvas;
pub use color::Rgba;
pub use headless::{DrawOp, RecordingSurface};
pub use scene::{ContourScene, SceneError, SceneParams};
pub use surface::{LineCap, Stroke, Surface};
