//! # Simply-Supported Beam Formulas
//!
//! Pin support at left (x = 0), roller at right (x = L). Deflection and
//! moment vanish at both ends.
//!
//! ```text
//!        P
//!        ↓
//!    ────┬────────────
//!    △   a            △
//!   R1  ←───────L────→ R2
//! ```
//!
//! ## Notation
//!
//! - `L` = Span length, `x` = position from left support
//! - `a` = Load position from left support, `b = L − a`
//! - `x_R = L − x` = position measured from the right support
//! - `P` = Point load, `q` = Uniform load, `M0` = Applied moment
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Cases 1a, 2a, 3a

use super::Response;

// =============================================================================
// POINT LOAD
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// # Formulas
/// - R1 = P·b/L
/// - R2 = P·a/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    (p * b / l, p * a / l)
}

/// Full response at x for point load P at position a
///
/// # Formulas (x ≤ a)
/// ```text
/// w = P·b·x·(L² − b² − x²) / (6·L·EI)
/// θ = P·b·(L² − b² − 3x²) / (6·L·EI)
/// M = P·b·x / L
/// V = P·b / L
/// ```
///
/// For x > a the same expressions are mirrored: `a` and `b` swap roles and
/// `x_R` replaces `x`. Because `x_R` runs the other way, the slope changes
/// sign and the shear becomes `−P·a/L`.
///
/// Moment peaks beneath the load at `P·a·b/L`; shear steps down by `P` there.
pub fn point_load(p: f64, a: f64, l: f64, ei: f64, x: f64) -> Response {
    let b = l - a;
    let (r1, r2) = point_load_reactions(p, a, l);

    if x <= a {
        Response::new(
            p * b * x * (l * l - b * b - x * x) / (6.0 * l * ei),
            p * b * (l * l - b * b - 3.0 * x * x) / (6.0 * l * ei),
            r1 * x,
            r1,
        )
    } else {
        let xr = l - x;
        Response::new(
            p * a * xr * (l * l - a * a - xr * xr) / (6.0 * l * ei),
            -p * a * (l * l - a * a - 3.0 * xr * xr) / (6.0 * l * ei),
            r2 * xr,
            -r2,
        )
    }
}

// =============================================================================
// UNIFORM LOAD (FULL SPAN)
// =============================================================================

/// Full response at x for uniform load q over the whole span
///
/// # Formulas
/// ```text
/// w = q·x·(L³ − 2L·x² + x³) / (24·EI)
/// θ = q·(L³ − 6L·x² + 4x³) / (24·EI)
/// M = q·x·(L − x) / 2
/// V = q·(L/2 − x)
/// ```
///
/// Maximum deflection 5qL⁴/(384EI) and moment qL²/8 at midspan, where the
/// shear crosses zero.
pub fn distributed_load(q: f64, l: f64, ei: f64, x: f64) -> Response {
    Response::new(
        q * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei),
        q * (l.powi(3) - 6.0 * l * x * x + 4.0 * x.powi(3)) / (24.0 * ei),
        q * x * (l - x) / 2.0,
        q * (l / 2.0 - x),
    )
}

// =============================================================================
// APPLIED MOMENT
// =============================================================================

/// Full response at x for a concentrated moment M0 at position a
///
/// The couple is resisted by reactions `R1 = M0/L` (up) and `R2 = −M0/L`,
/// so shear is `M0/L` on both sides of the load. Moment is linear on each
/// side and drops by `M0` at `x = a`:
///
/// ```text
/// x ≤ a:  M = M0·x/L
/// x > a:  M = −M0·x_R/L
/// ```
///
/// Deflection is cubic on each side; the integration constants
///
/// ```text
/// C1 =  M0·(a³ + 3a²b − 2b³) / (6L²)
/// C2 = −M0·(b³ + 3ab² − 2a³) / (6L²)
/// ```
///
/// make `w` and `θ` continuous at `a`.
pub fn applied_moment(m0: f64, a: f64, l: f64, ei: f64, x: f64) -> Response {
    let b = l - a;
    let shear = m0 / l;

    if x <= a {
        let c1 = m0 * (a.powi(3) + 3.0 * a * a * b - 2.0 * b.powi(3)) / (6.0 * l * l);
        Response::new(
            (c1 * x - m0 * x.powi(3) / (6.0 * l)) / ei,
            (c1 - m0 * x * x / (2.0 * l)) / ei,
            m0 * x / l,
            shear,
        )
    } else {
        let xr = l - x;
        let c2 = -m0 * (b.powi(3) + 3.0 * a * b * b - 2.0 * a.powi(3)) / (6.0 * l * l);
        Response::new(
            (m0 * xr.powi(3) / (6.0 * l) + c2 * xr) / ei,
            -(m0 * xr * xr / (2.0 * l) + c2) / ei,
            -m0 * xr / l,
            shear,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::test_support::{assert_consistent, close};

    const L: f64 = 4.0;
    const EI: f64 = 1.0e4;

    #[test]
    fn test_point_load_reactions_sum_to_load() {
        let (r1, r2) = point_load_reactions(1000.0, 3.0, 10.0);
        assert!(close(r1, 700.0, 1e-12));
        assert!(close(r2, 300.0, 1e-12));
    }

    #[test]
    fn test_point_load_midspan() {
        let p = 1000.0;
        let r = point_load(p, L / 2.0, L, EI, L / 2.0);
        assert!(close(r.moment, p * L / 4.0, 1e-12), "M = {}", r.moment);
        assert!(close(r.deflection, p * L.powi(3) / (48.0 * EI), 1e-12));
        assert!(close(r.slope, 0.0, 1e-12));
        assert!(close(r.shear, p / 2.0, 1e-12));
    }

    #[test]
    fn test_point_load_supports() {
        for &a in &[0.5, 1.7, 3.2] {
            let left = point_load(1000.0, a, L, EI, 0.0);
            let right = point_load(1000.0, a, L, EI, L);
            assert!(close(left.deflection, 0.0, 1e-12));
            assert!(close(right.deflection, 0.0, 1e-12));
            assert!(close(left.moment, 0.0, 1e-12));
            assert!(close(right.moment, 0.0, 1e-12));
        }
    }

    #[test]
    fn test_point_load_branches_meet() {
        let (p, a) = (1000.0, 1.3);
        let eps = 1e-9;
        let before = point_load(p, a, L, EI, a);
        let after = point_load(p, a, L, EI, a + eps);
        assert!(close(before.deflection, after.deflection, 1e-6));
        assert!(close(before.slope, after.slope, 1e-6));
        assert!(close(before.moment, after.moment, 1e-6));
        assert!(close(before.moment, p * a * (L - a) / L, 1e-12));
        assert!(close(before.shear - after.shear, p, 1e-12));
    }

    #[test]
    fn test_point_load_differential_consistency() {
        let eval = |x| point_load(1000.0, 1.3, L, EI, x);
        for &x in &[0.4, 1.0, 2.0, 3.5] {
            assert_consistent(eval, x, EI);
        }
    }

    #[test]
    fn test_distributed_load_midspan() {
        let q = 500.0;
        let r = distributed_load(q, L, EI, L / 2.0);
        assert!(close(r.deflection, 5.0 * q * L.powi(4) / (384.0 * EI), 1e-12));
        assert!(close(r.moment, q * L * L / 8.0, 1e-12));
        assert!(close(r.shear, 0.0, 1e-12));
    }

    #[test]
    fn test_distributed_load_differential_consistency() {
        let eval = |x| distributed_load(500.0, L, EI, x);
        for &x in &[0.3, 1.9, 3.7] {
            assert_consistent(eval, x, EI);
        }
    }

    #[test]
    fn test_applied_moment_shear_and_jump() {
        let (m0, a) = (800.0, 1.5);
        let before = applied_moment(m0, a, L, EI, a);
        let after = applied_moment(m0, a, L, EI, a + 1e-9);
        assert!(close(before.shear, m0 / L, 1e-12));
        assert!(close(after.shear, m0 / L, 1e-12));
        assert!(close(before.moment - after.moment, m0, 1e-6));
        assert!(close(before.deflection, after.deflection, 1e-6));
        assert!(close(before.slope, after.slope, 1e-6));
    }

    #[test]
    fn test_applied_moment_supports() {
        for &a in &[0.8, 2.0, 3.1] {
            let left = applied_moment(800.0, a, L, EI, 0.0);
            let right = applied_moment(800.0, a, L, EI, L);
            assert!(close(left.deflection, 0.0, 1e-12));
            assert!(close(right.deflection, 0.0, 1e-12));
            assert!(close(left.moment, 0.0, 1e-12));
            assert!(close(right.moment, 0.0, 1e-12));
        }
    }

    #[test]
    fn test_applied_moment_at_midspan_is_antisymmetric() {
        let m0 = 800.0;
        let mid = applied_moment(m0, L / 2.0, L, EI, L / 2.0);
        assert!(close(mid.deflection, 0.0, 1e-12));
        let left = applied_moment(m0, L / 2.0, L, EI, 1.0);
        let right = applied_moment(m0, L / 2.0, L, EI, L - 1.0);
        assert!(close(left.deflection, -right.deflection, 1e-12));
    }

    #[test]
    fn test_applied_moment_differential_consistency() {
        let eval = |x| applied_moment(800.0, 1.5, L, EI, x);
        for &x in &[0.5, 1.0, 2.5, 3.6] {
            assert_consistent(eval, x, EI);
        }
    }
}
