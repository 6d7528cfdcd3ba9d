//! sRGB gamut geometry in OkLab.
//!
//! For a fixed hue, the sRGB gamut in the (L, C) plane is close to a
//! triangle with corners at black, white and a **cusp** of maximum chroma.
//! OkHSV and the OkLCH hue ramps are built on that shape:
//!
//! ```text
//!   L
//! 1 +  white
//!   | \
//!   |   \
//!   |     * cusp (L_cusp, C_cusp)
//!   |   /
//! 0 +  black ------------- C
//! ```
//!
//! - [`compute_max_saturation`] - S = C/L where a channel first leaves the gamut
//! - [`find_cusp`] - L and C of the cusp
//! - [`find_gamut_intersection`] - Where a line in (L, C) meets the boundary
//! - [`max_chroma`] - Largest in-gamut chroma at a given lightness
//! - [`toe`], [`toe_inv`] - Lightness remap that keeps near-black well spaced
//!
//! All direction arguments `(a_, b_)` are a unit vector in the (a, b) plane.
//!
//! The polynomial and branch coefficients were fitted numerically by the
//! OkLab/OkHSV author and are reproduced verbatim; small changes move the
//! visible gamut boundary.

#![allow(clippy::excessive_precision)]

use crate::oklab::{LMS_TO_LINEAR, OKLAB_TO_LMS, Oklab, oklab_to_linear_rgb_unclamped};

/// Toe parameter k1.
pub const TOE_K1: f32 = 0.206;
/// Toe parameter k2.
pub const TOE_K2: f32 = 0.03;
/// Toe parameter k3, derived from k1 and k2.
pub const TOE_K3: f32 = (1.0 + TOE_K1) / (1.0 + TOE_K2);

/// Lightness and chroma of the gamut cusp for one hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cusp {
    /// Lightness at maximum chroma
    pub l: f32,
    /// Maximum chroma
    pub c: f32,
}

/// Slopes of the gamut triangle: `S = C / L` (lower edge), `T = C / (1 - L)` (upper edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct St {
    /// Lower-edge slope
    pub s: f32,
    /// Upper-edge slope
    pub t: f32,
}

/// Per-branch coefficients: polynomial k0..k4 then the RGB row weights.
struct Branch {
    k: [f32; 5],
    w: [f32; 3],
}

const BRANCHES: [Branch; 3] = [
    // red
    Branch {
        k: [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
        w: LMS_TO_LINEAR.m[0],
    },
    // green
    Branch {
        k: [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
        w: LMS_TO_LINEAR.m[1],
    },
    // blue
    Branch {
        k: [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
        w: LMS_TO_LINEAR.m[2],
    },
];

/// Maximum saturation `S = C / L` for a hue that still fits in sRGB.
///
/// Each channel has a polynomial fit refined by one Halley step (Newton
/// with the second derivative). The channel picked by the region test is
/// kept unless another channel lands closer to the gamut surface, which
/// happens right at the region seams (pure blue sits on one).
/// Returns 0 for the degenerate direction `(0, 0)`.
pub fn compute_max_saturation(a: f32, b: f32) -> f32 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let first = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        0
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        1
    } else {
        2
    };

    let mut best = saturation_on_branch(&BRANCHES[first], a, b);
    let mut best_err = boundary_error(best, a, b);
    for (i, branch) in BRANCHES.iter().enumerate() {
        if i == first {
            continue;
        }
        let s = saturation_on_branch(branch, a, b);
        let err = boundary_error(s, a, b);
        if err < best_err {
            best = s;
            best_err = err;
        }
    }
    best
}

/// Saturation where one channel of `(1, S a, S b)` reaches zero.
fn saturation_on_branch(branch: &Branch, a: f32, b: f32) -> f32 {
    let [k0, k1, k2, k3, k4] = branch.k;
    let [wl, wm, ws] = branch.w;

    let mut s = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    let k_l = OKLAB_TO_LMS.m[0][1] * a + OKLAB_TO_LMS.m[0][2] * b;
    let k_m = OKLAB_TO_LMS.m[1][1] * a + OKLAB_TO_LMS.m[1][2] * b;
    let k_s = OKLAB_TO_LMS.m[2][1] * a + OKLAB_TO_LMS.m[2][2] * b;

    let l_ = 1.0 + s * k_l;
    let m_ = 1.0 + s * k_m;
    let s_ = 1.0 + s * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let l_ds = 3.0 * k_l * l_ * l_;
    let m_ds = 3.0 * k_m * m_ * m_;
    let s_ds = 3.0 * k_s * s_ * s_;

    let l_ds2 = 6.0 * k_l * k_l * l_;
    let m_ds2 = 6.0 * k_m * k_m * m_;
    let s_ds2 = 6.0 * k_s * k_s * s_;

    let f = wl * l + wm * m + ws * s3;
    let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
    let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

    let step = f * f1 / (f1 * f1 - 0.5 * f * f2);
    if step.is_finite() {
        s -= step;
    }

    s
}

/// Distance of the lowest channel of `(1, S a, S b)` from zero.
fn boundary_error(s: f32, a: f32, b: f32) -> f32 {
    if !(s.is_finite() && s > 0.0) {
        return f32::INFINITY;
    }
    let rgb = oklab_to_linear_rgb_unclamped(Oklab::new(1.0, s * a, s * b));
    rgb.min_element().abs()
}

/// Finds the cusp (maximum in-gamut chroma) for a hue direction.
///
/// # Example
///
/// ```rust
/// use okpick_color::gamut::find_cusp;
///
/// // direction of sRGB red in OkLab
/// let h = 0.12585_f32.atan2(0.22486);
/// let cusp = find_cusp(h.cos(), h.sin());
/// assert!((cusp.l - 0.628).abs() < 1e-2);
/// assert!((cusp.c - 0.258).abs() < 1e-2);
/// ```
pub fn find_cusp(a: f32, b: f32) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);

    // scale L until the brightest channel reaches 1
    let rgb_at_max = oklab_to_linear_rgb_unclamped(Oklab::new(1.0, s_cusp * a, s_cusp * b));
    let l_cusp = (1.0 / rgb_at_max.max_element()).cbrt();

    Cusp {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Intersection of the line `L = L0 (1 - t) + t L1, C = t C1` with the gamut boundary.
///
/// Returns `t`. The lower half of the triangle is exact; the upper half
/// starts from the triangle and refines with one Halley step per channel.
pub fn find_gamut_intersection(a: f32, b: f32, l1: f32, c1: f32, l0: f32, cusp: Cusp) -> f32 {
    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // upper half: start at the triangle edge
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;

    let k_l = OKLAB_TO_LMS.m[0][1] * a + OKLAB_TO_LMS.m[0][2] * b;
    let k_m = OKLAB_TO_LMS.m[1][1] * a + OKLAB_TO_LMS.m[1][2] * b;
    let k_s = OKLAB_TO_LMS.m[2][1] * a + OKLAB_TO_LMS.m[2][2] * b;

    let l_dt = dl + dc * k_l;
    let m_dt = dl + dc * k_m;
    let s_dt = dl + dc * k_s;

    let l = l0 * (1.0 - t) + t * l1;
    let c = t * c1;

    let l_ = l + c * k_l;
    let m_ = l + c * k_m;
    let s_ = l + c * k_s;

    let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
    let lms_dt = [
        3.0 * l_dt * l_ * l_,
        3.0 * m_dt * m_ * m_,
        3.0 * s_dt * s_ * s_,
    ];
    let lms_dt2 = [
        6.0 * l_dt * l_dt * l_,
        6.0 * m_dt * m_dt * m_,
        6.0 * s_dt * s_dt * s_,
    ];

    let weighted = |w: [f32; 3], v: [f32; 3]| w[0] * v[0] + w[1] * v[1] + w[2] * v[2];

    let mut step = f32::MAX;
    for row in LMS_TO_LINEAR.m {
        let f = weighted(row, lms) - 1.0;
        let f1 = weighted(row, lms_dt);
        let f2 = weighted(row, lms_dt2);

        let u = f1 / (f1 * f1 - 0.5 * f * f2);
        if u >= 0.0 {
            step = step.min(-f * u);
        }
    }

    if step.is_finite() && step != f32::MAX {
        t += step;
    }

    t
}

/// Largest chroma that stays inside sRGB at lightness `l` along direction `(a_, b_)`.
///
/// Zero at and beyond black and white.
pub fn max_chroma(l: f32, a_: f32, b_: f32) -> f32 {
    if !(l > 0.0 && l < 1.0) {
        return 0.0;
    }
    let cusp = find_cusp(a_, b_);
    let t = find_gamut_intersection(a_, b_, l, 1.0, l, cusp);
    if t.is_finite() { t.max(0.0) } else { 0.0 }
}

/// Triangle slopes at the cusp.
#[inline]
pub fn to_st(cusp: Cusp) -> St {
    St {
        s: cusp.c / cusp.l,
        t: cusp.c / (1.0 - cusp.l),
    }
}

/// Remaps OkLab lightness to a scale closer to CIE L* near black.
#[inline]
pub fn toe(x: f32) -> f32 {
    let k = TOE_K3 * x - TOE_K1;
    0.5 * (k + (k * k + 4.0 * TOE_K2 * TOE_K3 * x).sqrt())
}

/// Inverse of [`toe`].
#[inline]
pub fn toe_inv(x: f32) -> f32 {
    (x * x + TOE_K1 * x) / (TOE_K3 * (x + TOE_K2))
}
