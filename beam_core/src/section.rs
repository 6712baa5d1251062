//! # Cross Sections
//!
//! The engine models a single section shape: the solid rectangle. A
//! [`CrossSection`] is validated on construction so everything derived from
//! it (I, S, stresses) is finite and positive.

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    extreme_fiber_distance,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
};
use crate::errors::{CalcError, CalcResult};

/// Solid rectangular cross-section
///
/// ## JSON Example
///
/// ```json
/// { "width": 0.1, "height": 0.15 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Width b (m)
    pub width: f64,
    /// Height h (m), measured in the plane of bending
    pub height: f64,
}

impl CrossSection {
    /// Create a section, rejecting non-positive or non-finite dimensions
    pub fn new(width: f64, height: f64) -> CalcResult<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(CrossSection { width, height })
    }

    /// Second moment of area I = b·h³/12 (m⁴)
    pub fn moment_of_inertia(&self) -> f64 {
        rectangular_moment_of_inertia(self.width, self.height)
    }

    /// Area A = b·h (m²)
    pub fn area(&self) -> f64 {
        rectangular_area(self.width, self.height)
    }

    /// Section modulus S = b·h²/6 (m³)
    pub fn section_modulus(&self) -> f64 {
        rectangular_section_modulus(self.width, self.height)
    }

    /// Distance from neutral axis to extreme fibre, h/2 (m)
    pub fn extreme_fiber_distance(&self) -> f64 {
        extreme_fiber_distance(self.height)
    }
}

fn check_dimension(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_configuration(
            field,
            value.to_string(),
            "Section dimensions must be positive",
        ))
    }
}

/// Second moment of area for a `b × h` rectangle, rejecting `b ≤ 0` or `h ≤ 0`
///
/// # Example
/// ```rust
/// use beam_core::section::moment_of_inertia;
///
/// let i = moment_of_inertia(0.1, 0.15).unwrap();
/// assert!((i - 2.8125e-5).abs() < 1e-12);
/// assert!(moment_of_inertia(0.0, 0.15).is_err());
/// ```
pub fn moment_of_inertia(b: f64, h: f64) -> CalcResult<f64> {
    CrossSection::new(b, h).map(|s| s.moment_of_inertia())
}
