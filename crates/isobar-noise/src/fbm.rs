#![forbid(unsafe_code)]

//! Layered (octave) sampling over a [`SimplexNoise`] field.
//!
//! A single noise octave reads as smooth blobs; summing a few octaves at
//! doubling frequency and halving amplitude adds the fine ridges that make a
//! contour field look topographic. The drift input slides the field along x
//! over time, attenuated per octave so coarse features move faster than fine
//! ones.

use crate::simplex::SimplexNoise;

/// Octave-stack parameters.
///
/// The defaults (3 octaves, lacunarity 2, gain 0.5) produce
/// `(N(x + d, y) + 0.5 N(2x + 0.5d, 2y) + 0.25 N(4x + 0.25d, 4y)) / 1.75`,
/// i.e. a three-layer field normalized by the total amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct FbmParams {
    /// Number of layers. Zero octaves sample as a flat 0 field.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude (and drift) multiplier between octaves.
    pub gain: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

/// Multi-octave sampler owning its noise source.
#[derive(Debug, Clone)]
pub struct FbmSampler {
    noise: SimplexNoise,
    params: FbmParams,
}

impl FbmSampler {
    pub fn new(noise: SimplexNoise, params: FbmParams) -> Self {
        Self { noise, params }
    }

    /// Sampler with the default three-octave stack.
    pub fn with_default_params(noise: SimplexNoise) -> Self {
        Self::new(noise, FbmParams::default())
    }

    pub fn noise(&self) -> &SimplexNoise {
        &self.noise
    }

    pub fn params(&self) -> &FbmParams {
        &self.params
    }

    /// Sample the layered field at `(x, y)`, slid along x by `drift`.
    ///
    /// Output is normalized by the summed octave amplitudes, so it stays in
    /// the same approximate `[-1, 1]` range as a single octave.
    ///
    /// # Determinism
    ///
    /// Pure function of the sampler and its inputs.
    pub fn sample(&self, x: f64, y: f64, drift: f64) -> f64 {
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut drift_amp = 1.0;

        for _ in 0..self.params.octaves {
            total += self.noise.noise2(x * frequency + drift * drift_amp, y * frequency)
                * amplitude;
            norm += amplitude;
            amplitude *= self.params.gain;
            drift_amp *= self.params.gain;
            frequency *= self.params.lacunarity;
        }

        if norm > 0.0 { total / norm } else { 0.0 }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
