//! # Beam Inputs
//!
//! The parameter set a front end collects before running an analysis:
//! material by name, section by dimensions, all three load magnitudes, and
//! an optional load position. [`BeamInputs::to_configuration`] resolves it
//! into a [`BeamConfiguration`], applying the same defaults and clamping an
//! interactive tool would.
//!
//! Missing JSON fields take their defaults, so a file holding only
//! `{ "beam_type": "cantilever" }` is a complete input.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::inputs::BeamInputs;
//!
//! let inputs = BeamInputs {
//!     material: "aluminum".to_string(),
//!     load_position: Some(5.0), // beyond the 2 m span
//!     ..BeamInputs::default()
//! };
//!
//! let config = inputs.to_configuration().unwrap();
//! assert_eq!(config.elastic_modulus, 69.0e9);
//! assert!((config.load_position - 1.99).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam_analysis::{analyze, AnalysisResult, BeamConfiguration, BeamType, LoadType};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialCatalog, CUSTOM_MATERIAL_ID};
use crate::section::CrossSection;

/// Minimum distance kept between the load and either end of the span (m)
pub const LOAD_POSITION_MARGIN: f64 = 0.01;

/// Raw analysis parameters with front-end defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamInputs {
    /// Support condition
    pub beam_type: BeamType,
    /// Active load kind
    pub load_type: LoadType,
    /// Material identifier ("steel", "aluminum", "copper", "wood", "custom")
    pub material: String,
    /// Elastic modulus for the "custom" material (GPa)
    pub custom_modulus_gpa: Option<f64>,
    /// Span length L (m)
    pub length: f64,
    /// Section width b (m)
    pub width: f64,
    /// Section height h (m)
    pub height: f64,
    /// Point load P (N)
    pub point_load: f64,
    /// Uniform load q (N/m)
    pub distributed_load: f64,
    /// Applied moment M0 (N·m)
    pub applied_moment: f64,
    /// Load position a (m); midspan when absent
    pub load_position: Option<f64>,
    /// Number of sample intervals
    pub num_points: usize,
}

impl Default for BeamInputs {
    fn default() -> Self {
        BeamInputs {
            beam_type: BeamType::SimplySupported,
            load_type: LoadType::Point,
            material: "steel".to_string(),
            custom_modulus_gpa: None,
            length: 2.0,
            width: 0.1,
            height: 0.15,
            point_load: 10_000.0,
            distributed_load: 5_000.0,
            applied_moment: 5_000.0,
            load_position: None,
            num_points: 100,
        }
    }
}

/// Clamp a load position into `[margin, L − margin]`.
///
/// Spans too short to hold the margin on both sides get the load at midspan.
pub fn clamp_load_position(a: f64, length: f64) -> f64 {
    let lo = LOAD_POSITION_MARGIN;
    let hi = length - LOAD_POSITION_MARGIN;
    if !(hi >= lo) {
        return length / 2.0;
    }
    a.max(lo).min(hi)
}

impl BeamInputs {
    /// Cross-section built from `width` × `height`
    pub fn section(&self) -> CalcResult<CrossSection> {
        CrossSection::new(self.width, self.height)
    }

    /// Elastic modulus resolved against the global catalog (Pa)
    pub fn elastic_modulus(&self) -> f64 {
        MaterialCatalog::global().elastic_modulus(&self.material, self.custom_modulus_gpa)
    }

    /// Load position after defaulting to midspan and clamping (m)
    pub fn effective_load_position(&self) -> f64 {
        let a = self.load_position.unwrap_or(self.length / 2.0);
        clamp_load_position(a, self.length)
    }

    /// Resolve into an engine configuration.
    ///
    /// Fails only on an invalid section; span, stiffness and sample count
    /// are checked by [`analyze`]. Unknown materials resolve to steel.
    pub fn to_configuration(&self) -> CalcResult<BeamConfiguration> {
        let section = self.section()?;

        Ok(BeamConfiguration {
            beam_type: self.beam_type,
            load_type: self.load_type,
            length: self.length,
            elastic_modulus: self.elastic_modulus(),
            moment_of_inertia: section.moment_of_inertia(),
            point_load: self.point_load,
            distributed_load: self.distributed_load,
            applied_moment: self.applied_moment,
            load_position: self.effective_load_position(),
            num_points: self.num_points,
        })
    }

    /// Resolve and analyze in one step
    pub fn analyze(&self) -> CalcResult<AnalysisResult> {
        analyze(&self.to_configuration()?)
    }

    /// Opt-in strict checks for identifiers the engine would otherwise tolerate.
    ///
    /// Rejects unknown beam/load types, unknown materials, a "custom" material
    /// without a positive modulus, and an explicit load position outside (0, L).
    pub fn validate_strict(&self) -> CalcResult<()> {
        if self.beam_type == BeamType::Unknown {
            return Err(CalcError::invalid_input(
                "beam_type",
                self.beam_type.id(),
                "Expected simply-supported, fixed-fixed or cantilever",
            ));
        }
        if self.load_type == LoadType::Unknown {
            return Err(CalcError::invalid_input(
                "load_type",
                self.load_type.id(),
                "Expected point, distributed or moment",
            ));
        }
        if !MaterialCatalog::global().contains(&self.material) {
            return Err(CalcError::invalid_input(
                "material",
                self.material.clone(),
                "Material not found in catalog",
            ));
        }
        if self.material == CUSTOM_MATERIAL_ID {
            match self.custom_modulus_gpa {
                Some(gpa) if gpa.is_finite() && gpa > 0.0 => {}
                other => {
                    return Err(CalcError::invalid_input(
                        "custom_modulus_gpa",
                        format!("{:?}", other),
                        "Custom material requires a positive modulus in GPa",
                    ));
                }
            }
        }
        if let Some(a) = self.load_position {
            if !(a > 0.0 && a < self.length) {
                return Err(CalcError::invalid_input(
                    "load_position",
                    a.to_string(),
                    "Load position must lie strictly inside the span",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = BeamInputs::default();
        let config = inputs.to_configuration().unwrap();
        assert_eq!(config.beam_type, BeamType::SimplySupported);
        assert_eq!(config.load_type, LoadType::Point);
        assert_eq!(config.length, 2.0);
        assert_eq!(config.elastic_modulus, 200.0e9);
        assert!((config.moment_of_inertia - 2.8125e-5).abs() < 1e-15);
        assert_eq!(config.point_load, 10_000.0);
        assert_eq!(config.distributed_load, 5_000.0);
        assert_eq!(config.applied_moment, 5_000.0);
        assert_eq!(config.load_position, 1.0);
        assert_eq!(config.num_points, 100);
    }

    #[test]
    fn test_load_position_clamped() {
        assert_eq!(clamp_load_position(0.0, 2.0), 0.01);
        assert_eq!(clamp_load_position(-3.0, 2.0), 0.01);
        assert!((clamp_load_position(2.0, 2.0) - 1.99).abs() < 1e-12);
        assert_eq!(clamp_load_position(0.7, 2.0), 0.7);
        // Span too short for the margins
        assert_eq!(clamp_load_position(0.001, 0.015), 0.0075);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let inputs: BeamInputs = serde_json::from_str(r#"{ "beam_type": "cantilever", "length": 3.0 }"#).unwrap();
        assert_eq!(inputs.beam_type, BeamType::Cantilever);
        assert_eq!(inputs.length, 3.0);
        assert_eq!(inputs.material, "steel");
        assert_eq!(inputs.effective_load_position(), 1.5);
    }

    #[test]
    fn test_custom_material() {
        let inputs = BeamInputs {
            material: "custom".to_string(),
            custom_modulus_gpa: Some(45.0),
            ..BeamInputs::default()
        };
        assert_eq!(inputs.to_configuration().unwrap().elastic_modulus, 45.0e9);
        assert!(inputs.validate_strict().is_ok());
    }

    #[test]
    fn test_unknown_material_is_permissive_but_fails_strict() {
        let inputs = BeamInputs {
            material: "granite".to_string(),
            ..BeamInputs::default()
        };
        assert_eq!(inputs.to_configuration().unwrap().elastic_modulus, 200.0e9);
        let err = inputs.validate_strict().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "material"));
    }

    #[test]
    fn test_strict_rejects_unknown_types() {
        let inputs: BeamInputs = serde_json::from_str(r#"{ "load_type": "triangular" }"#).unwrap();
        assert_eq!(inputs.load_type, LoadType::Unknown);
        assert!(inputs.analyze().is_ok());
        assert!(inputs.validate_strict().is_err());
    }

    #[test]
    fn test_strict_rejects_custom_without_modulus() {
        let inputs = BeamInputs {
            material: "custom".to_string(),
            ..BeamInputs::default()
        };
        assert!(inputs.validate_strict().is_err());
    }

    #[test]
    fn test_strict_rejects_load_outside_span() {
        let inputs = BeamInputs {
            load_position: Some(2.5),
            ..BeamInputs::default()
        };
        assert!(inputs.validate_strict().is_err());
        // The permissive path clamps instead
        assert!((inputs.to_configuration().unwrap().load_position - 1.99).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_section_rejected() {
        let inputs = BeamInputs {
            height: 0.0,
            ..BeamInputs::default()
        };
        assert!(inputs.to_configuration().is_err());
    }
}
