#![forbid(unsafe_code)]

//! Noise: seeded gradient noise for the Isobar contour pipeline.
//!
//! # Role in Isobar
//! `isobar-noise` is the field layer. It owns the deterministic pseudo-random
//! scalar field everything downstream samples: a seeded 2D simplex noise
//! generator and a layered (octave) sampler that adds fractal detail and a
//! time drift for animation.
//!
//! # Primary responsibilities
//! - **SimplexNoise**: seedable 2D gradient noise, bit-identical for equal
//!   seeds, roughly within `[-1, 1]`.
//! - **FbmSampler**: octave stack over a `SimplexNoise` with per-octave
//!   frequency/amplitude/drift scaling.
//!
//! # How it fits in the system
//! `isobar-contour` samples this field over a vertex grid each tick, and
//! `isobar-render` wires the two together into an animated scene. Nothing in
//! this crate touches a clock, a surface, or any I/O.

pub mod fbm;
pub mod simplex;

pub use fbm::{FbmParams, FbmSampler};
pub use simplex::SimplexNoise;
