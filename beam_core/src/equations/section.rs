//! # Cross-Section Property and Stress Formulas
//!
//! Geometric properties of the solid rectangular section and the flexure
//! formula that turns an internal moment into a fibre stress.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area (m²)
//! - `I` = Second moment of area about the strong axis (m⁴)
//! - `S` = Section modulus, I/c (m³)
//! - `c` = Distance from the neutral axis to the extreme fibre (m)
//! - `b` = Width of section (m)
//! - `h` = Height of section (m)
//! - `σ` = Normal bending stress (Pa)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3 and Table A.1
//! - Gere & Goodno, Mechanics of Materials, Section 5.5 (flexure formula)

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate second moment of area for rectangular section about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// This is the raw formula and performs no validation; use
/// [`CrossSection::new`](crate::section::CrossSection::new) when the
/// dimensions come from user input.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.1, 0.15);
/// assert!((i - 2.8125e-5).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the neutral axis to the extreme fibre of a rectangle
///
/// # Formula
/// c = h/2
#[inline]
pub fn extreme_fiber_distance(h: f64) -> f64 {
    h / 2.0
}

/// Calculate section modulus for rectangular section
///
/// # Formula
/// S = I/c = bh²/6
#[inline]
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h * h / 6.0
}

// =============================================================================
// BENDING STRESS
// =============================================================================

/// Bending stress at distance `y` from the neutral axis
///
/// # Formula (flexure formula)
/// σ = M·y / I
///
/// The sign follows the moment and `y`; with sagging moment positive and
/// `y` measured downward the result is positive in tension.
#[inline]
pub fn bending_stress(m: f64, y: f64, i: f64) -> f64 {
    m * y / i
}

/// Extreme-fibre bending stress for a rectangular section
///
/// # Formula
/// σ_max = |M_max| · (h/2) / I
///
/// Only valid for the symmetric rectangular section modelled here.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::max_bending_stress;
///
/// // 5 kN·m on a 100 × 150 mm section
/// let sigma = max_bending_stress(5000.0, 0.15, 2.8125e-5);
/// assert!((sigma - 13.333e6).abs() < 1e3);
/// ```
#[inline]
pub fn max_bending_stress(max_moment: f64, h: f64, i: f64) -> f64 {
    max_moment.abs() * extreme_fiber_distance(h) / i
}
