//! Deterministic simplex noise over 2, 3 and 4 dimensions.
//!
//! This crate evaluates continuous pseudo-random scalar fields for
//! procedural generation: terrain heightmaps, texture detail and animated
//! parameter curves. The permutation and gradient tables are fixed
//! compile-time constants, so every build returns bit-identical values for
//! the same inputs with no seeding step anywhere.
//!
//! # Features
//!
//! - **Raw kernels**: 2D, 3D and 4D simplex noise in (-1, 1)
//! - **Octave composition**: fractal sums with per-octave persistence
//! - **Range scaling**: affine remap of either signal into `[lo, hi]`
//! - **Recipe parameters**: serde-ready [`OctaveParams`] bundle
//!
//! # Example
//!
//! ```
//! use simplexfield::{raw_noise_2d, scaled_octave_noise_2d};
//!
//! // One heightmap texel in [0, 255].
//! let h = scaled_octave_noise_2d(4, 0.5, 0.01, 0.0, 255.0, 37.0, 81.0);
//! assert!((0.0..=255.0).contains(&h));
//!
//! // Raw values are zero-mean and stay inside (-1, 1).
//! let v = raw_noise_2d(0.37, 1.19);
//! assert!(v.abs() < 1.0);
//! ```
//!
//! # Determinism
//!
//! Every function is a pure function of its arguments plus the fixed
//! tables: no state, no locks, no call-order effects. Calls are safe from
//! any number of threads, and a value recorded once is reproducible on any
//! platform with IEEE 754 doubles.

mod octave;
mod params;
mod simplex;
mod tables;

pub use octave::{
    octave_noise_2d, octave_noise_3d, octave_noise_4d, scaled_octave_noise_2d,
    scaled_octave_noise_3d, scaled_octave_noise_4d,
};
pub use params::OctaveParams;
pub use simplex::{
    raw_noise_2d, raw_noise_3d, raw_noise_4d, scaled_raw_noise_2d, scaled_raw_noise_3d,
    scaled_raw_noise_4d,
};
