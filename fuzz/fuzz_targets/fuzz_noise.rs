#![no_main]

use libfuzzer_sys::fuzz_target;

use simplexfield::{
    octave_noise_2d, raw_noise_2d, raw_noise_3d, raw_noise_4d, scaled_raw_noise_2d,
};

fn f64_at(data: &[u8], index: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[index * 8..index * 8 + 8]);
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 48 {
        return;
    }
    let x = f64_at(data, 0);
    let y = f64_at(data, 1);
    let z = f64_at(data, 2);
    let w = f64_at(data, 3);
    let lo = f64_at(data, 4);
    let hi = f64_at(data, 5);

    // Arbitrary bit patterns, NaN and infinities included, must never
    // panic the kernels. Finite coordinates come back finite; a NaN
    // coordinate comes back NaN.
    let v = raw_noise_2d(x, y);
    if x.is_finite() && y.is_finite() {
        assert!(v.is_finite(), "raw_noise_2d({x}, {y}) = {v}");
    } else if x.is_nan() || y.is_nan() {
        assert!(v.is_nan(), "raw_noise_2d({x}, {y}) = {v}");
    }

    let v = raw_noise_3d(x, y, z);
    if x.is_finite() && y.is_finite() && z.is_finite() {
        assert!(v.is_finite(), "raw_noise_3d({x}, {y}, {z}) = {v}");
    } else if x.is_nan() || y.is_nan() || z.is_nan() {
        assert!(v.is_nan(), "raw_noise_3d({x}, {y}, {z}) = {v}");
    }

    let v = raw_noise_4d(x, y, z, w);
    if x.is_finite() && y.is_finite() && z.is_finite() && w.is_finite() {
        assert!(v.is_finite(), "raw_noise_4d({x}, {y}, {z}, {w}) = {v}");
    } else if x.is_nan() || y.is_nan() || z.is_nan() || w.is_nan() {
        assert!(v.is_nan(), "raw_noise_4d({x}, {y}, {z}, {w}) = {v}");
    }

    let octaves = u32::from(data[0] % 8) + 1;
    let _ = octave_noise_2d(octaves, 0.5, 1.0, x, y);
    let _ = scaled_raw_noise_2d(lo, hi, x, y);
});
