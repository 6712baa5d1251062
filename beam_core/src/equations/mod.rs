//! # Beam Equations
//!
//! Closed-form Euler-Bernoulli solutions for a single prismatic span.
//! Each boundary condition lives in its own module and exposes one function
//! per load kind; every function evaluates the full state at a single
//! position `x` and returns a [`Response`].
//!
//! ## Modules
//!
//! - [`simply_supported`] - Pin at x = 0, roller at x = L
//! - [`fixed_fixed`] - Both ends clamped
//! - [`cantilever`] - Clamped at x = 0, free at x = L
//! - [`section`] - Rectangular section properties and bending stress
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (P, q); applied moment M0 as defined per module
//! - **Deflection**: Positive downward
//! - **Moment**: Positive causes tension on bottom fibre (sagging)
//! - **Shear**: V = dM/dx
//! - **Curvature**: EI·w'' = −M
//!
//! Point loads and applied moments are piecewise in x, switching expression
//! at the load position `a` (x ≤ a uses the left branch). Distributed loads
//! always act over the full span and use a single polynomial.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - AISC Steel Construction Manual, Part 3: Beam Diagrams and Formulas

pub mod cantilever;
pub mod fixed_fixed;
pub mod section;
pub mod simply_supported;

use serde::{Deserialize, Serialize};

pub use section::{
    bending_stress,
    extreme_fiber_distance,
    max_bending_stress,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
};

/// Beam state at a single position along the span
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Deflection w (m, positive downward)
    pub deflection: f64,
    /// Slope θ = dw/dx (rad)
    pub slope: f64,
    /// Internal bending moment M (N·m)
    pub moment: f64,
    /// Internal shear V (N)
    pub shear: f64,
}

impl Response {
    /// All-zero response, used where no handler applies
    pub const ZERO: Response = Response {
        deflection: 0.0,
        slope: 0.0,
        moment: 0.0,
        shear: 0.0,
    };

    /// Build a response from its four components
    #[inline]
    pub fn new(deflection: f64, slope: f64, moment: f64, shear: f64) -> Self {
        Response {
            deflection,
            slope,
            moment,
            shear,
        }
    }
}
