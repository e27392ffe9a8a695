//! Behavioral checks for the noise kernels: determinism, output range,
//! and spatial variation.
//!
//! Run these tests with:
//! ```bash
//! cargo test -p simplexfield --test noise_behavior
//! ```

use std::collections::BTreeSet;

use simplexfield::{octave_noise_2d, raw_noise_2d, raw_noise_3d, raw_noise_4d, OctaveParams};

// ============================================================================
// Determinism
// ============================================================================

/// The same coordinates always produce bit-identical output. There is no
/// hidden state anywhere in the pipeline.
#[test]
fn test_repeat_calls_are_bit_identical() {
    let a = raw_noise_2d(3.7, -12.9);
    let b = raw_noise_2d(3.7, -12.9);
    assert_eq!(a.to_bits(), b.to_bits());

    let a = raw_noise_3d(3.7, -12.9, 0.42);
    let b = raw_noise_3d(3.7, -12.9, 0.42);
    assert_eq!(a.to_bits(), b.to_bits());

    let a = raw_noise_4d(3.7, -12.9, 0.42, 81.5);
    let b = raw_noise_4d(3.7, -12.9, 0.42, 81.5);
    assert_eq!(a.to_bits(), b.to_bits());

    let a = octave_noise_2d(6, 0.55, 0.013, 3.7, -12.9);
    let b = octave_noise_2d(6, 0.55, 0.013, 3.7, -12.9);
    assert_eq!(a.to_bits(), b.to_bits());
}

/// Parameter-struct sampling is just as deterministic as the free
/// functions it delegates to.
#[test]
fn test_params_sampling_is_bit_identical() {
    let params = OctaveParams {
        octaves: 5,
        persistence: 0.62,
        scale: 0.031,
    };
    let a = params.sample_3d(14.0, -3.5, 9.25);
    let b = params.sample_3d(14.0, -3.5, 9.25);
    assert_eq!(a.to_bits(), b.to_bits());
}

// ============================================================================
// Output Range
// ============================================================================

/// 2D output stays within [-1, 1] across a dense grid spanning negative
/// and positive cells, and actually uses a wide slice of that range.
#[test]
fn test_raw_2d_range_over_grid() {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for ix in 0..64 {
        for iy in 0..64 {
            let x = ix as f64 * 0.1 - 3.2;
            let y = iy as f64 * 0.1 - 3.2;
            let v = raw_noise_2d(x, y);
            assert!(
                (-1.0..=1.0).contains(&v),
                "raw_noise_2d({}, {}) = {} is out of range",
                x,
                y,
                v
            );
            min = min.min(v);
            max = max.max(v);
        }
    }
    assert!(min < -0.8, "grid minimum {} never gets near -1", min);
    assert!(max > 0.8, "grid maximum {} never gets near +1", max);
}

/// 3D output stays within [-1, 1] over a grid and uses the range.
#[test]
fn test_raw_3d_range_over_grid() {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for ix in 0..16 {
        for iy in 0..16 {
            for iz in 0..16 {
                let x = ix as f64 * 0.2 - 1.6;
                let y = iy as f64 * 0.2 - 1.6;
                let z = iz as f64 * 0.2 - 1.6;
                let v = raw_noise_3d(x, y, z);
                assert!(
                    (-1.0..=1.0).contains(&v),
                    "raw_noise_3d({}, {}, {}) = {} is out of range",
                    x,
                    y,
                    z,
                    v
                );
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    assert!(min < -0.8, "grid minimum {} never gets near -1", min);
    assert!(max > 0.8, "grid maximum {} never gets near +1", max);
}

/// 4D output stays within [-1, 1] over a grid and uses the range.
#[test]
fn test_raw_4d_range_over_grid() {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for ix in 0..8 {
        for iy in 0..8 {
            for iz in 0..8 {
                for iw in 0..8 {
                    let x = ix as f64 * 0.3 - 1.2;
                    let y = iy as f64 * 0.3 - 1.2;
                    let z = iz as f64 * 0.3 - 1.2;
                    let w = iw as f64 * 0.3 - 1.2;
                    let v = raw_noise_4d(x, y, z, w);
                    assert!(
                        (-1.0..=1.0).contains(&v),
                        "raw_noise_4d({}, {}, {}, {}) = {} is out of range",
                        x,
                        y,
                        z,
                        w,
                        v
                    );
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
    }
    assert!(min < -0.8, "grid minimum {} never gets near -1", min);
    assert!(max > 0.8, "grid maximum {} never gets near +1", max);
}

// ============================================================================
// Spatial Variation
// ============================================================================

/// A line of 100 samples through the field produces 100 distinct values.
/// A constant or repeating output would mean a dead hash chain.
#[test]
fn test_samples_along_a_line_are_distinct() {
    let mut seen = BTreeSet::new();
    for n in 0..100 {
        let x = n as f64 * 0.13;
        let y = 7.7 - n as f64 * 0.09;
        seen.insert(raw_noise_2d(x, y).to_bits());
    }
    assert_eq!(seen.len(), 100, "expected 100 distinct samples, got {}", seen.len());
}

/// Adding a dimension changes the field: a 3D sample on the z = 0 plane
/// is not the 2D sample at the same (x, y), and likewise for 4D on the
/// w = 0 hyperplane. The kernels use different gradient sets and hash
/// chains, so agreement would be a wiring bug.
#[test]
fn test_dimensions_are_independent_fields() {
    let flat = raw_noise_2d(0.7, 1.3);
    let volume = raw_noise_3d(0.7, 1.3, 0.0);
    assert_ne!(flat.to_bits(), volume.to_bits());

    let volume = raw_noise_3d(0.7, 1.3, 2.9);
    let hyper = raw_noise_4d(0.7, 1.3, 2.9, 0.0);
    assert_ne!(volume.to_bits(), hyper.to_bits());
}
