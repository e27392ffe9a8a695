//! Raw simplex noise kernels for 2, 3 and 4 dimensions.
//!
//! Each kernel skews the query point onto a simplicial lattice, ranks the
//! fractional offsets to pick the traversal order of the enclosing cell's
//! corners, and sums one falloff-weighted gradient dot product per corner.
//! The kernels are pure functions over the fixed tables in [`crate::tables`];
//! there is no seed and no state.

use crate::tables::{GRAD3, GRAD4, PERM, SIMPLEX};

const SQRT_3: f64 = 1.7320508075688772;
const SQRT_5: f64 = 2.23606797749979;

// Skew/unskew factors between input space and the simplex lattice.
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
const G2: f64 = (3.0 - SQRT_3) / 6.0;
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
const G4: f64 = (5.0 - SQRT_5) / 20.0;

/// Chained permutation lookup for a 2D simplex corner.
///
/// Lattice indices are masked to [0, 255] before the lookup; the corner
/// offsets stay in {0, 1} and the doubled table absorbs them without a
/// second mask.
#[inline]
fn hash2(i: i32, j: i32, di: usize, dj: usize) -> usize {
    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    PERM[ii + di + PERM[jj + dj] as usize] as usize
}

#[inline]
fn hash3(i: i32, j: i32, k: i32, di: usize, dj: usize, dk: usize) -> usize {
    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let kk = (k & 255) as usize;
    PERM[ii + di + PERM[jj + dj + PERM[kk + dk] as usize] as usize] as usize
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn hash4(i: i32, j: i32, k: i32, l: i32, di: usize, dj: usize, dk: usize, dl: usize) -> usize {
    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let kk = (k & 255) as usize;
    let ll = (l & 255) as usize;
    PERM[ii + di + PERM[jj + dj + PERM[kk + dk + PERM[ll + dl] as usize] as usize] as usize]
        as usize
}

/// Dot product with a hashed 3D gradient, x/y components only.
#[inline]
fn grad2(hash: usize, x: f64, y: f64) -> f64 {
    let g = &GRAD3[hash % 12];
    g[0] * x + g[1] * y
}

#[inline]
fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let g = &GRAD3[hash % 12];
    g[0] * x + g[1] * y + g[2] * z
}

#[inline]
fn grad4(hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
    let g = &GRAD4[hash % 32];
    g[0] * x + g[1] * y + g[2] * z + g[3] * w
}

/// Raw 2D simplex noise in (-1, 1).
///
/// Deterministic for any `(x, y)` and continuous everywhere. Any finite
/// coordinates produce a defined result; there are no error paths.
pub fn raw_noise_2d(x: f64, y: f64) -> f64 {
    // Skew the input space to find the containing simplex cell. Cell
    // indices round toward negative infinity so points with negative
    // skewed coordinates land in their true cell.
    let s = (x + y) * F2;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;

    // Unskew the cell origin back to (x, y) space. The index sum stays in
    // f64 so saturated casts from huge inputs cannot overflow it.
    let t = (i as f64 + j as f64) * G2;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);

    // The 2D simplex is a triangle; the larger fractional offset decides
    // which of the two triangles in the skewed square we are in.
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let gi0 = hash2(i, j, 0, 0);
    let gi1 = hash2(i, j, i1, j1);
    let gi2 = hash2(i, j, 1, 1);

    let t0 = 0.5 - x0 * x0 - y0 * y0;
    let n0 = if t0 < 0.0 {
        0.0
    } else {
        let t0 = t0 * t0;
        t0 * t0 * grad2(gi0, x0, y0)
    };

    let t1 = 0.5 - x1 * x1 - y1 * y1;
    let n1 = if t1 < 0.0 {
        0.0
    } else {
        let t1 = t1 * t1;
        t1 * t1 * grad2(gi1, x1, y1)
    };

    let t2 = 0.5 - x2 * x2 - y2 * y2;
    let n2 = if t2 < 0.0 {
        0.0
    } else {
        let t2 = t2 * t2;
        t2 * t2 * grad2(gi2, x2, y2)
    };

    // Scale the corner sum into (-1, 1).
    70.0 * (n0 + n1 + n2)
}

/// Raw 3D simplex noise in (-1, 1).
pub fn raw_noise_3d(x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;
    let k = (z + s).floor() as i32;

    let t = (i as f64 + j as f64 + k as f64) * G3;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);

    // Rank the fractional offsets to pick one of the six tetrahedra in
    // the skewed cube. i1/j1/k1 step to the second corner, i2/j2/k2 to
    // the third.
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0) // x y z
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1) // x z y
        } else {
            (0, 0, 1, 1, 0, 1) // z x y
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1) // z y x
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1) // y z x
    } else {
        (0, 1, 0, 1, 1, 0) // y x z
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let gi0 = hash3(i, j, k, 0, 0, 0);
    let gi1 = hash3(i, j, k, i1, j1, k1);
    let gi2 = hash3(i, j, k, i2, j2, k2);
    let gi3 = hash3(i, j, k, 1, 1, 1);

    let t0 = 0.6 - x0 * x0 - y0 * y0 - z0 * z0;
    let n0 = if t0 < 0.0 {
        0.0
    } else {
        let t0 = t0 * t0;
        t0 * t0 * grad3(gi0, x0, y0, z0)
    };

    let t1 = 0.6 - x1 * x1 - y1 * y1 - z1 * z1;
    let n1 = if t1 < 0.0 {
        0.0
    } else {
        let t1 = t1 * t1;
        t1 * t1 * grad3(gi1, x1, y1, z1)
    };

    let t2 = 0.6 - x2 * x2 - y2 * y2 - z2 * z2;
    let n2 = if t2 < 0.0 {
        0.0
    } else {
        let t2 = t2 * t2;
        t2 * t2 * grad3(gi2, x2, y2, z2)
    };

    let t3 = 0.6 - x3 * x3 - y3 * y3 - z3 * z3;
    let n3 = if t3 < 0.0 {
        0.0
    } else {
        let t3 = t3 * t3;
        t3 * t3 * grad3(gi3, x3, y3, z3)
    };

    // Scale the corner sum to stay just inside [-1, 1].
    32.0 * (n0 + n1 + n2 + n3)
}

/// Raw 4D simplex noise in (-1, 1).
///
/// The fourth coordinate is commonly driven by time to animate a 3D field.
pub fn raw_noise_4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    let s = (x + y + z + w) * F4;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;
    let k = (z + s).floor() as i32;
    let l = (w + s).floor() as i32;

    let t = (i as f64 + j as f64 + k as f64 + l as f64) * G4;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);
    let w0 = w - (l as f64 - t);

    // Six pairwise comparisons of the fractional offsets pack into a bit
    // index whose table row ranks the four axes. An axis steps to 1 once
    // the corner number reaches that axis's rank.
    let c1 = if x0 > y0 { 32 } else { 0 };
    let c2 = if x0 > z0 { 16 } else { 0 };
    let c3 = if y0 > z0 { 8 } else { 0 };
    let c4 = if x0 > w0 { 4 } else { 0 };
    let c5 = if y0 > w0 { 2 } else { 0 };
    let c6 = if z0 > w0 { 1 } else { 0 };
    let c = c1 + c2 + c3 + c4 + c5 + c6;

    let rank = &SIMPLEX[c];
    let i1 = (rank[0] >= 3) as usize;
    let j1 = (rank[1] >= 3) as usize;
    let k1 = (rank[2] >= 3) as usize;
    let l1 = (rank[3] >= 3) as usize;
    let i2 = (rank[0] >= 2) as usize;
    let j2 = (rank[1] >= 2) as usize;
    let k2 = (rank[2] >= 2) as usize;
    let l2 = (rank[3] >= 2) as usize;
    let i3 = (rank[0] >= 1) as usize;
    let j3 = (rank[1] >= 1) as usize;
    let k3 = (rank[2] >= 1) as usize;
    let l3 = (rank[3] >= 1) as usize;

    let x1 = x0 - i1 as f64 + G4;
    let y1 = y0 - j1 as f64 + G4;
    let z1 = z0 - k1 as f64 + G4;
    let w1 = w0 - l1 as f64 + G4;
    let x2 = x0 - i2 as f64 + 2.0 * G4;
    let y2 = y0 - j2 as f64 + 2.0 * G4;
    let z2 = z0 - k2 as f64 + 2.0 * G4;
    let w2 = w0 - l2 as f64 + 2.0 * G4;
    let x3 = x0 - i3 as f64 + 3.0 * G4;
    let y3 = y0 - j3 as f64 + 3.0 * G4;
    let z3 = z0 - k3 as f64 + 3.0 * G4;
    let w3 = w0 - l3 as f64 + 3.0 * G4;
    let x4 = x0 - 1.0 + 4.0 * G4;
    let y4 = y0 - 1.0 + 4.0 * G4;
    let z4 = z0 - 1.0 + 4.0 * G4;
    let w4 = w0 - 1.0 + 4.0 * G4;

    let gi0 = hash4(i, j, k, l, 0, 0, 0, 0);
    let gi1 = hash4(i, j, k, l, i1, j1, k1, l1);
    let gi2 = hash4(i, j, k, l, i2, j2, k2, l2);
    let gi3 = hash4(i, j, k, l, i3, j3, k3, l3);
    let gi4 = hash4(i, j, k, l, 1, 1, 1, 1);

    let t0 = 0.6 - x0 * x0 - y0 * y0 - z0 * z0 - w0 * w0;
    let n0 = if t0 < 0.0 {
        0.0
    } else {
        let t0 = t0 * t0;
        t0 * t0 * grad4(gi0, x0, y0, z0, w0)
    };

    let t1 = 0.6 - x1 * x1 - y1 * y1 - z1 * z1 - w1 * w1;
    let n1 = if t1 < 0.0 {
        0.0
    } else {
        let t1 = t1 * t1;
        t1 * t1 * grad4(gi1, x1, y1, z1, w1)
    };

    let t2 = 0.6 - x2 * x2 - y2 * y2 - z2 * z2 - w2 * w2;
    let n2 = if t2 < 0.0 {
        0.0
    } else {
        let t2 = t2 * t2;
        t2 * t2 * grad4(gi2, x2, y2, z2, w2)
    };

    let t3 = 0.6 - x3 * x3 - y3 * y3 - z3 * z3 - w3 * w3;
    let n3 = if t3 < 0.0 {
        0.0
    } else {
        let t3 = t3 * t3;
        t3 * t3 * grad4(gi3, x3, y3, z3, w3)
    };

    let t4 = 0.6 - x4 * x4 - y4 * y4 - z4 * z4 - w4 * w4;
    let n4 = if t4 < 0.0 {
        0.0
    } else {
        let t4 = t4 * t4;
        t4 * t4 * grad4(gi4, x4, y4, z4, w4)
    };

    27.0 * (n0 + n1 + n2 + n3 + n4)
}

/// Raw 2D noise remapped into `[lo, hi]`.
///
/// No validation: `hi < lo` yields a mirrored but well-defined result.
pub fn scaled_raw_noise_2d(lo: f64, hi: f64, x: f64, y: f64) -> f64 {
    raw_noise_2d(x, y) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}

/// Raw 3D noise remapped into `[lo, hi]`.
pub fn scaled_raw_noise_3d(lo: f64, hi: f64, x: f64, y: f64, z: f64) -> f64 {
    raw_noise_3d(x, y, z) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}

/// Raw 4D noise remapped into `[lo, hi]`.
pub fn scaled_raw_noise_4d(lo: f64, hi: f64, x: f64, y: f64, z: f64, w: f64) -> f64 {
    raw_noise_4d(x, y, z, w) * (hi - lo) / 2.0 + (hi + lo) / 2.0
}
