//! # Fixed-Fixed Beam Formulas
//!
//! Both ends clamped: deflection and slope vanish at x = 0 and x = L, and
//! the supports develop end moments (hogging, so negative in this sign
//! convention).
//!
//! ```text
//!   ▐        P
//!   ▐        ↓
//!   ▐────────┬──────────▌
//!   ▐   a    │    b     ▌
//!   ▐ ←──────L────────→ ▌
//! ```
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Cases 1d, 2d, 3d
//! - AISC Steel Construction Manual, Part 3, Cases 15 and 16

use super::Response;

// =============================================================================
// POINT LOAD
// =============================================================================

/// End reactions for point load P at position a
///
/// # Formulas
/// - R1 = P·b²·(3a + b) / L³
/// - R2 = P·a²·(a + 3b) / L³
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let l3 = l.powi(3);
    (p * b * b * (3.0 * a + b) / l3, p * a * a * (a + 3.0 * b) / l3)
}

/// Fixed-end moments for point load P at position a
///
/// # Formulas
/// - M1 = −P·a·b² / L²
/// - M2 = −P·a²·b / L²
#[inline]
pub fn point_load_end_moments(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let l2 = l * l;
    (-p * a * b * b / l2, -p * a * a * b / l2)
}

/// Full response at x for point load P at position a
///
/// # Formulas (x ≤ a)
/// ```text
/// w = P·b²·x²·(3a·L − (3a + b)·x) / (6·L³·EI)
/// θ = P·b²·x·(2a·L − (3a + b)·x) / (2·L³·EI)
/// M = M1 + R1·x
/// V = R1
/// ```
///
/// For x > a the expressions mirror with `a ↔ b` and `x_R = L − x`; shear
/// is `−R2`. The moment under the load is `2·P·a²·b² / L³`.
pub fn point_load(p: f64, a: f64, l: f64, ei: f64, x: f64) -> Response {
    let b = l - a;
    let l3 = l.powi(3);
    let (r1, r2) = point_load_reactions(p, a, l);
    let (m1, m2) = point_load_end_moments(p, a, l);

    if x <= a {
        Response::new(
            p * b * b * x * x * (3.0 * a * l - (3.0 * a + b) * x) / (6.0 * l3 * ei),
            p * b * b * x * (2.0 * a * l - (3.0 * a + b) * x) / (2.0 * l3 * ei),
            m1 + r1 * x,
            r1,
        )
    } else {
        let xr = l - x;
        Response::new(
            p * a * a * xr * xr * (3.0 * b * l - (3.0 * b + a) * xr) / (6.0 * l3 * ei),
            -p * a * a * xr * (2.0 * b * l - (3.0 * b + a) * xr) / (2.0 * l3 * ei),
            m2 + r2 * xr,
            -r2,
        )
    }
}

// =============================================================================
// UNIFORM LOAD (FULL SPAN)
// =============================================================================

/// Fixed-end moment for uniform load q over full span
///
/// # Formula
/// M_end = −qL²/12 (both ends)
#[inline]
pub fn distributed_load_end_moment(q: f64, l: f64) -> f64 {
    -q * l * l / 12.0
}

/// Full response at x for uniform load q over the whole span
///
/// # Formulas
/// ```text
/// w = q·x²·(L − x)² / (24·EI)
/// θ = q·x·(L − x)·(L − 2x) / (12·EI)
/// M = (q/12)·(6L·x − 6x² − L²)
/// V = q·(L/2 − x)
/// ```
///
/// End moments −qL²/12, midspan moment qL²/24, midspan deflection qL⁴/(384EI).
pub fn distributed_load(q: f64, l: f64, ei: f64, x: f64) -> Response {
    let xr = l - x;
    Response::new(
        q * x * x * xr * xr / (24.0 * ei),
        q * x * xr * (l - 2.0 * x) / (12.0 * ei),
        q / 12.0 * (6.0 * l * x - 6.0 * x * x - l * l),
        q * (l / 2.0 - x),
    )
}

// =============================================================================
// APPLIED MOMENT
// =============================================================================

/// Constant shear and left end moment for a concentrated moment M0 at a
///
/// # Formulas
/// - V = 6·M0·a·b / L³
/// - M_A = M0·b·(b − 2a) / L²
///
/// These follow from requiring zero slope and deflection at both clamps.
#[inline]
pub fn applied_moment_reactions(m0: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    (6.0 * m0 * a * b / l.powi(3), m0 * b * (b - 2.0 * a) / (l * l))
}

/// Full response at x for a concentrated moment M0 at position a
///
/// Moment is `M_A + V·x` left of the load and drops by `M0` across it, with
/// shear `V` constant over the span. Deflection and slope come from
/// integrating `EI·w'' = −M` once from the left clamp using singularity
/// terms, so a single expression covers both sides:
///
/// ```text
/// EI·θ = −(M_A·x + V·x²/2 − M0·⟨x − a⟩)
/// EI·w = −(M_A·x²/2 + V·x³/6 − M0·⟨x − a⟩²/2)
/// ```
///
/// Exact clamped-clamped solution, not a reduced polynomial fit (see DESIGN.md).
pub fn applied_moment(m0: f64, a: f64, l: f64, ei: f64, x: f64) -> Response {
    let (v, ma) = applied_moment_reactions(m0, a, l);

    if x <= a {
        Response::new(
            -(ma * x * x / 2.0 + v * x.powi(3) / 6.0) / ei,
            -(ma * x + v * x * x / 2.0) / ei,
            ma + v * x,
            v,
        )
    } else {
        let d = x - a;
        Response::new(
            -(ma * x * x / 2.0 + v * x.powi(3) / 6.0 - m0 * d * d / 2.0) / ei,
            -(ma * x + v * x * x / 2.0 - m0 * d) / ei,
            ma + v * x - m0,
            v,
        )
    }
}
