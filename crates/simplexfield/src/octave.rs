//! Fractal octave composition over the raw kernels.
//!
//! Each octave samples the raw kernel at double the previous frequency and
//! `persistence` times the previous amplitude, then the running total is
//! normalized by the highest attainable amplitude sum so the result lands
//! back in (-1, 1).

use crate::simplex::{raw_noise_2d, raw_noise_3d, raw_noise_4d};

/// 2D multi-octave simplex noise in (-1, 1).
///
/// `octaves` must be at least 1: with zero octaves the normalizing
/// amplitude sum stays 0.0 and the result is NaN. `persistence` is meant
/// to lie in (0, 1]; values outside make successive octaves grow instead
/// of decay. Neither misuse is checked.
pub fn octave_noise_2d(octaves: u32, persistence: f64, scale: f64, x: f64, y: f64) -> f64 {
    let mut total = 0.0;
    let mut frequency = scale;
    let mut amplitude = 1.0;
    // Highest amplitude the sum could reach, for normalization.
    let mut max_amplitude = 0.0;

    for _ in 0..octaves {
        total += raw_noise_2d(x * frequency, y * frequency) * amplitude;
        frequency *= 2.0;
        max_amplitude += amplitude;
        amplitude *= persistence;
    }

    total / max_amplitude
}

/// 3D multi-octave simplex noise in (-1, 1).
///
/// Same precondition notes as [`octave_noise_2d`].
pub fn octave_noise_3d(octaves: u32, persistence: f64, scale: f64, x: f64, y: f64, z: f64) -> f64 {
    let mut total = 0.0;
    let mut frequency = scale;
    let mut amplitude = 1.0;
    let mut max_amplitude = 0.0;

    for _ in 0..octaves {
        total += raw_noise_3d(x * frequency, y * frequency, z * frequency) * amplitude;
        frequency *= 2.0;
        max_amplitude += amplitude;
        amplitude *= persistence;
    }

    total / max_amplitude
}

/// 4D multi-octave simplex noise in (-1, 1).
///
/// Same precondition notes as [`octave_noise_2d`].
pub fn octave_noise_4d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    x: f64,
    y: f64,
    z: f64,
    w: f64,
) -> f64 {
    let mut total = 0.0;
    let mut frequency = scale;
    let mut amplitude = 1.0;
    let mut max_amplitude = 0.0;

    for _ in 0..octaves {
        total += raw_noise_4d(x * frequency, y * frequency, z * frequency, w * frequency)
            * amplitude;
        frequency *= 2.0;
        max_amplitude += amplitude;
        amplitude *= persistence;
    }

    total / max_amplitude
}

/// 2D multi-octave noise remapped into `[lo, hi]`.
pub fn scaled_octave_noise_2d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
) -> f64 {
    octave_noise_2d(octaves, persistence, scale, x, y) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}

/// 3D multi-octave noise remapped into `[lo, hi]`.
#[allow(clippy::too_many_arguments)]
pub fn scaled_octave_noise_3d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    octave_noise_3d(octaves, persistence, scale, x, y, z) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}

/// 4D multi-octave noise remapped into `[lo, hi]`.
#[allow(clippy::too_many_arguments)]
pub fn scaled_octave_noise_4d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
    z: f64,
    w: f64,
) -> f64 {
    octave_noise_4d(octaves, persistence, scale, x, y, z, w) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One octave is the raw kernel at base frequency, whatever the
    /// persistence: amplitude 1.0 contributes once and normalizes by 1.0.
    #[test]
    fn test_single_octave_is_raw_kernel() {
        for &p in &[0.1, 0.5, 1.0, 2.5] {
            for &s in &[0.25, 1.0, 3.0] {
                assert_eq!(
                    octave_noise_2d(1, p, s, 0.7, -1.3),
                    raw_noise_2d(0.7 * s, -1.3 * s),
                    "persistence {} scale {} broke the identity",
                    p,
                    s
                );
                assert_eq!(
                    octave_noise_3d(1, p, s, 0.7, -1.3, 2.2),
                    raw_noise_3d(0.7 * s, -1.3 * s, 2.2 * s)
                );
                assert_eq!(
                    octave_noise_4d(1, p, s, 0.7, -1.3, 2.2, 0.1),
                    raw_noise_4d(0.7 * s, -1.3 * s, 2.2 * s, 0.1 * s)
                );
            }
        }
    }

    /// Zero octaves divides 0.0 by 0.0; the degenerate result is NaN by
    /// contract, not a panic.
    #[test]
    fn test_zero_octaves_yields_nan() {
        assert!(octave_noise_2d(0, 0.5, 1.0, 1.0, 2.0).is_nan());
        assert!(octave_noise_3d(0, 0.5, 1.0, 1.0, 2.0, 3.0).is_nan());
        assert!(octave_noise_4d(0, 0.5, 1.0, 1.0, 2.0, 3.0, 4.0).is_nan());
    }

    /// The normalized sum cannot exceed the raw kernel's bounds.
    #[test]
    fn test_octave_sum_stays_normalized() {
        for n in 0..64 {
            let x = n as f64 * 0.19 - 4.0;
            let y = n as f64 * 0.23 + 1.5;
            let v = octave_noise_2d(6, 0.5, 1.3, x, y);
            assert!(
                (-1.0..=1.0).contains(&v),
                "octave value {} at ({}, {}) left (-1, 1)",
                v,
                x,
                y
            );
        }
    }
}
