#![forbid(unsafe_code)]

//! The per-view render context.
//!
//! One [`ContourScene`] drives one animated view: it owns the noise sampler,
//! the reusable vertex grid, the immutable scene parameters, and the time
//! accumulator. The host owns the scene and calls
//! [`render_frame`](ContourScene::render_frame) once per tick; there is no
//! module-level state anywhere in the pipeline.
//!
//! # Frame anatomy
//!
//! A tick runs to completion without blocking:
//!
//! 1. read the surface size and re-dimension the grid if it changed,
//! 2. clear the surface and set the stroke style,
//! 3. fill the grid from the layered noise field at the current time,
//! 4. for each threshold level, extract and stroke contour segments
//!    (the grid is threshold-independent, so one fill serves every level),
//! 5. advance time by the fixed per-tick increment.
//!
//! Cancellation is the absence of the next call; no tick ever needs to be
//! interrupted.
//!
//! # Determinism
//!
//! Two scenes constructed with equal parameters produce identical draw
//! sequences for the same surface sizes and tick counts.

use crate::color::Rgba;
use crate::surface::{LineCap, Stroke, Surface};
use isobar_contour::{ValueGrid, march_grid, thresholds};
use isobar_noise::{FbmParams, FbmSampler, SimplexNoise};
use std::fmt;

/// Scene configuration: fixed constants, read-only after construction.
///
/// The defaults give the classic look: a slow drift over a large-featured
/// field, twelve contour levels, and faint white lines on a near-black
/// background.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    /// Noise seed.
    pub seed: u64,
    /// Spatial scale: pixel coordinates are multiplied by this before
    /// sampling. Smaller values mean larger features.
    pub scale: f64,
    /// Time advance per tick, in field drift units.
    pub speed: f64,
    /// Number of evenly spaced contour levels spanning [-1, 1).
    pub levels: usize,
    /// Grid cell size in pixels: the marching-squares resolution.
    pub cell_size: f64,
    /// Stroke style for contour lines.
    pub stroke: Stroke,
    /// Background fill.
    pub background: Rgba,
    /// Octave-stack shape for the layered field.
    pub octaves: FbmParams,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            seed: 42,
            scale: 0.003,
            speed: 0.0003,
            levels: 12,
            cell_size: 8.0,
            stroke: Stroke {
                // 8% white keeps the lines subtle against the dark fill.
                color: Rgba::rgba(255, 255, 255, 20),
                width: 1.0,
                cap: LineCap::Round,
            },
            background: Rgba::rgb(0x1a, 0x1a, 0x1a),
            octaves: FbmParams::default(),
        }
    }
}

/// Scene construction failure.
///
/// Construction validates eagerly so a bad configuration cannot surface
/// later as NaN geometry mid-animation; there is no partially constructed
/// state to recover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    /// `cell_size` must be strictly positive and finite.
    InvalidCellSize(f64),
    /// `scale` must be strictly positive and finite.
    InvalidScale(f64),
    /// `speed` must be finite.
    InvalidSpeed(f64),
    /// `levels` must be at least 1.
    ZeroLevels,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize(v) => {
                write!(f, "cell_size must be positive and finite, got {v}")
            }
            Self::InvalidScale(v) => write!(f, "scale must be positive and finite, got {v}"),
            Self::InvalidSpeed(v) => write!(f, "speed must be finite, got {v}"),
            Self::ZeroLevels => write!(f, "levels must be at least 1"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Render context for one animated contour view.
pub struct ContourScene {
    params: SceneParams,
    field: FbmSampler,
    grid: ValueGrid,
    time: f64,
    frame: u64,
}

impl ContourScene {
    /// Build a scene, validating the configuration.
    pub fn new(params: SceneParams) -> Result<Self, SceneError> {
        if !(params.cell_size.is_finite() && params.cell_size > 0.0) {
            return Err(SceneError::InvalidCellSize(params.cell_size));
        }
        if !(params.scale.is_finite() && params.scale > 0.0) {
            return Err(SceneError::InvalidScale(params.scale));
        }
        if !params.speed.is_finite() {
            return Err(SceneError::InvalidSpeed(params.speed));
        }
        if params.levels == 0 {
            return Err(SceneError::ZeroLevels);
        }

        let field = FbmSampler::new(SimplexNoise::new(params.seed), params.octaves.clone());
        Ok(Self {
            params,
            field,
            grid: ValueGrid::new(),
            time: 0.0,
            frame: 0,
        })
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    /// Accumulated field drift.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ticks rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current grid dimensions as `(cols, rows)` of vertices. `(0, 0)`
    /// before the first frame.
    pub fn grid_size(&self) -> (usize, usize) {
        if self.grid.is_unsized() {
            (0, 0)
        } else {
            (self.grid.cols(), self.grid.rows())
        }
    }

    /// Render one animation tick onto `surface` and advance time.
    ///
    /// The surface's current size is read at the top of the tick, so an
    /// external resize takes effect on the next frame with no stale
    /// samples. An empty surface still clears and still advances time.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = surface.size();

        surface.clear(self.params.background);
        surface.set_stroke(self.params.stroke);

        if width > 0 && height > 0 {
            self.grid.ensure_size(width, height, self.params.cell_size);

            let scale = self.params.scale;
            let t = self.time;
            let field = &self.field;
            self.grid
                .fill_with(|x, y| field.sample(x * scale, y * scale, t));

            for threshold in thresholds(self.params.levels) {
                march_grid(&self.grid, threshold, |segment| {
                    surface.stroke_segment(segment);
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            frame = self.frame,
            width,
            height,
            time = self.time,
            "rendered contour frame"
        );

        self.time += self.params.speed;
        self.frame += 1;
    }
}

impl fmt::Debug for ContourScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContourScene")
            .field("params", &self.params)
            .field("time", &self.time)
            .field("frame", &self.frame)
            .field("grid_size", &self.grid_size())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::RecordingSurface;

    #[test]
    fn construction_validates_parameters() {
        let bad_cell = SceneParams {
            cell_size: 0.0,
            ..SceneParams::default()
        };
        assert_eq!(
            ContourScene::new(bad_cell).unwrap_err(),
            SceneError::InvalidCellSize(0.0)
        );

        let bad_scale = SceneParams {
            scale: f64::NAN,
            ..SceneParams::default()
        };
        assert!(matches!(
            ContourScene::new(bad_scale).unwrap_err(),
            SceneError::InvalidScale(_)
        ));

        let bad_speed = SceneParams {
            speed: f64::INFINITY,
            ..SceneParams::default()
        };
        assert!(matches!(
            ContourScene::new(bad_speed).unwrap_err(),
            SceneError::InvalidSpeed(_)
        ));

        let bad_levels = SceneParams {
            levels: 0,
            ..SceneParams::default()
        };
        assert_eq!(
            ContourScene::new(bad_levels).unwrap_err(),
            SceneError::ZeroLevels
        );
    }

    #[test]
    fn error_messages_name_the_offender() {
        let msg = SceneError::InvalidCellSize(-3.0).to_string();
        assert!(msg.contains("cell_size") && msg.contains("-3"));
        assert!(SceneError::ZeroLevels.to_string().contains("levels"));
    }

    #[test]
    fn time_advances_by_speed_each_tick() {
        let mut scene = ContourScene::new(SceneParams::default()).unwrap();
        let speed = scene.params().speed;
        let mut surface = RecordingSurface::new(64, 48);

        assert_eq!(scene.time(), 0.0);
        scene.render_frame(&mut surface);
        assert_eq!(scene.time(), speed);
        scene.render_frame(&mut surface);
        assert_eq!(scene.time(), speed * 2.0);
        assert_eq!(scene.frame(), 2);
    }

    #[test]
    fn empty_surface_clears_and_ticks_without_segments() {
        let mut scene = ContourScene::new(SceneParams::default()).unwrap();
        let mut surface = RecordingSurface::new(0, 0);
        scene.render_frame(&mut surface);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.segment_count(), 0);
        assert_eq!(scene.frame(), 1);
        assert_eq!(scene.grid_size(), (0, 0));
    }
}
