//! # Cantilever Beam Formulas
//!
//! Clamped at x = 0, free at x = L. The load position `a` is measured from
//! the fixed end.
//!
//! ```text
//!   ▐            P
//!   ▐            ↓
//!   ▐────────────┬──────
//!   ▐ ←── a ───→      free
//!   ▐ ←──────L────────→
//! ```
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Cases 1a-3a (free end)
//! - AISC Steel Construction Manual, Part 3, Cases 19 and 22

use super::Response;

/// Full response at x for point load P at distance a from the fixed end
///
/// # Formulas
/// ```text
/// x ≤ a:  w = P·x²·(3a − x) / (6·EI)     θ = P·x·(2a − x) / (2·EI)
///         M = −P·(a − x)                 V = P
/// x > a:  w = P·a²·(3x − a) / (6·EI)     θ = P·a² / (2·EI)
///         M = 0                          V = 0
/// ```
///
/// Beyond the load the beam carries nothing, so it rotates rigidly with the
/// slope it has at `a` and the internal forces are exactly zero.
pub fn point_load(p: f64, a: f64, ei: f64, x: f64) -> Response {
    if x <= a {
        Response::new(
            p * x * x * (3.0 * a - x) / (6.0 * ei),
            p * x * (2.0 * a - x) / (2.0 * ei),
            -p * (a - x),
            p,
        )
    } else {
        Response::new(
            p * a * a * (3.0 * x - a) / (6.0 * ei),
            p * a * a / (2.0 * ei),
            0.0,
            0.0,
        )
    }
}

/// Full response at x for uniform load q over the whole span
///
/// # Formulas
/// ```text
/// w = q·x²·(6L² − 4L·x + x²) / (24·EI)
/// θ = q·x·(3L² − 3L·x + x²) / (6·EI)
/// M = −(q/2)·(L − x)²
/// V = q·(L − x)
/// ```
///
/// Tip deflection qL⁴/(8EI); root moment −qL²/2 and root shear qL.
pub fn distributed_load(q: f64, l: f64, ei: f64, x: f64) -> Response {
    let xr = l - x;
    Response::new(
        q * x * x * (6.0 * l * l - 4.0 * l * x + x * x) / (24.0 * ei),
        q * x * (3.0 * l * l - 3.0 * l * x + x * x) / (6.0 * ei),
        -q / 2.0 * xr * xr,
        q * xr,
    )
}

/// Full response at x for a moment M0 applied at the free end
///
/// # Formulas
/// ```text
/// w = M0·x² / (2·EI)
/// θ = M0·x / EI
/// M = −M0
/// V = 0
/// ```
///
/// The moment is uniform, so the beam bends into a circular arc (to small
/// deflection order) and no load position enters.
pub fn applied_moment(m0: f64, ei: f64, x: f64) -> Response {
    Response::new(m0 * x * x / (2.0 * ei), m0 * x / ei, -m0, 0.0)
}
