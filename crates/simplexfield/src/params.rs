//! Serializable octave-parameter bundles.
//!
//! Callers that keep generation settings in recipe files can deserialize
//! an [`OctaveParams`] and sample through it instead of threading three
//! loose numbers around.

use serde::{Deserialize, Serialize};

use crate::octave::{
    octave_noise_2d, octave_noise_3d, octave_noise_4d, scaled_octave_noise_2d,
    scaled_octave_noise_3d, scaled_octave_noise_4d,
};

/// Octave composition parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Number of octaves summed. Must be at least 1 (see
    /// [`octave_noise_2d`] for the zero-octave degenerate case).
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    /// Amplitude decay per octave, intended range (0, 1].
    #[serde(default = "default_persistence")]
    pub persistence: f64,
    /// Base frequency multiplier applied to every coordinate.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_octaves() -> u32 {
    4
}

fn default_persistence() -> f64 {
    0.5
}

fn default_scale() -> f64 {
    1.0
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: default_octaves(),
            persistence: default_persistence(),
            scale: default_scale(),
        }
    }
}

impl OctaveParams {
    /// Multi-octave noise at `(x, y)` in (-1, 1).
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        octave_noise_2d(self.octaves, self.persistence, self.scale, x, y)
    }

    /// Multi-octave noise at `(x, y, z)` in (-1, 1).
    pub fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        octave_noise_3d(self.octaves, self.persistence, self.scale, x, y, z)
    }

    /// Multi-octave noise at `(x, y, z, w)` in (-1, 1).
    pub fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        octave_noise_4d(self.octaves, self.persistence, self.scale, x, y, z, w)
    }

    /// Multi-octave noise at `(x, y)` remapped into `[lo, hi]`.
    pub fn sample_scaled_2d(&self, lo: f64, hi: f64, x: f64, y: f64) -> f64 {
        scaled_octave_noise_2d(self.octaves, self.persistence, self.scale, lo, hi, x, y)
    }

    /// Multi-octave noise at `(x, y, z)` remapped into `[lo, hi]`.
    pub fn sample_scaled_3d(&self, lo: f64, hi: f64, x: f64, y: f64, z: f64) -> f64 {
        scaled_octave_noise_3d(self.octaves, self.persistence, self.scale, lo, hi, x, y, z)
    }

    /// Multi-octave noise at `(x, y, z, w)` remapped into `[lo, hi]`.
    pub fn sample_scaled_4d(&self, lo: f64, hi: f64, x: f64, y: f64, z: f64, w: f64) -> f64 {
        scaled_octave_noise_4d(self.octaves, self.persistence, self.scale, lo, hi, x, y, z, w)
    }
}
