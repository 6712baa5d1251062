//! # Materials Catalog
//!
//! Elastic moduli for the handful of isotropic materials the engine knows
//! about, plus an override path for a user-supplied modulus.
//!
//! The catalog is built once and never mutated. Lookups never fail: an
//! unrecognised identifier resolves to steel, which is the documented
//! default rather than an error. Callers that want strict behaviour should
//! check [`MaterialCatalog::contains`] (or use
//! [`BeamInputs::validate_strict`](crate::inputs::BeamInputs::validate_strict))
//! before calling the engine.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{elastic_modulus, MaterialCatalog};
//!
//! assert_eq!(elastic_modulus("steel", None), 200.0e9);
//! assert_eq!(elastic_modulus("custom", Some(45.0)), 45.0e9);
//!
//! // Unknown identifiers fall back to steel
//! assert_eq!(elastic_modulus("unobtanium", None), 200.0e9);
//!
//! let catalog = MaterialCatalog::global();
//! assert!(catalog.contains("wood"));
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier that selects the user-supplied modulus override
pub const CUSTOM_MATERIAL_ID: &str = "custom";

/// Pascals per gigapascal
const PA_PER_GPA: f64 = 1.0e9;

/// Materials with a catalogued elastic modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardMaterial {
    Steel,
    Aluminum,
    Copper,
    Wood,
}

impl StandardMaterial {
    /// All catalogued materials, in display order
    pub const ALL: [StandardMaterial; 4] = [
        StandardMaterial::Steel,
        StandardMaterial::Aluminum,
        StandardMaterial::Copper,
        StandardMaterial::Wood,
    ];

    /// Identifier used for lookups and JSON (e.g., "steel")
    pub fn id(&self) -> &'static str {
        match self {
            StandardMaterial::Steel => "steel",
            StandardMaterial::Aluminum => "aluminum",
            StandardMaterial::Copper => "copper",
            StandardMaterial::Wood => "wood",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StandardMaterial::Steel => "Structural Steel",
            StandardMaterial::Aluminum => "Aluminum",
            StandardMaterial::Copper => "Copper",
            StandardMaterial::Wood => "Wood (along grain)",
        }
    }

    /// Modulus of elasticity E (Pa)
    pub fn e_pa(&self) -> f64 {
        match self {
            StandardMaterial::Steel => 200.0e9,
            StandardMaterial::Aluminum => 69.0e9,
            StandardMaterial::Copper => 117.0e9,
            StandardMaterial::Wood => 11.0e9,
        }
    }

    /// Parse from common string representations ("Steel", " ALUMINUM ", "aluminium")
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "steel" => Some(StandardMaterial::Steel),
            "aluminum" | "aluminium" => Some(StandardMaterial::Aluminum),
            "copper" => Some(StandardMaterial::Copper),
            "wood" | "timber" => Some(StandardMaterial::Wood),
            _ => None,
        }
    }
}

impl std::fmt::Display for StandardMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable mapping from material identifier to elastic modulus (Pa)
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCatalog {
    moduli: BTreeMap<&'static str, f64>,
    fallback: StandardMaterial,
}

static GLOBAL_CATALOG: Lazy<MaterialCatalog> = Lazy::new(MaterialCatalog::standard);

impl MaterialCatalog {
    /// Build the standard catalog (steel, aluminum, copper, wood) with steel as fallback
    pub fn standard() -> Self {
        let moduli = StandardMaterial::ALL
            .iter()
            .map(|m| (m.id(), m.e_pa()))
            .collect();
        MaterialCatalog {
            moduli,
            fallback: StandardMaterial::Steel,
        }
    }

    /// Process-wide catalog, constructed on first use
    pub fn global() -> &'static MaterialCatalog {
        &GLOBAL_CATALOG
    }

    /// Exact lookup by identifier
    pub fn lookup(&self, material_id: &str) -> Option<f64> {
        self.moduli.get(material_id).copied()
    }

    /// Whether the identifier is catalogued or selects the custom override
    pub fn contains(&self, material_id: &str) -> bool {
        material_id == CUSTOM_MATERIAL_ID || self.moduli.contains_key(material_id)
    }

    /// Catalogued identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.moduli.keys().copied()
    }

    /// Resolve an elastic modulus in pascals.
    ///
    /// `custom` with a supplied value returns `custom_gpa × 1e9`. Anything
    /// else is looked up in the catalog, and an identifier that is not found
    /// resolves to the fallback material (steel).
    pub fn elastic_modulus(&self, material_id: &str, custom_gpa: Option<f64>) -> f64 {
        if material_id == CUSTOM_MATERIAL_ID {
            if let Some(gpa) = custom_gpa {
                return gpa * PA_PER_GPA;
            }
        }

        match self.lookup(material_id) {
            Some(e) => e,
            None => {
                log::warn!(
                    "unknown material '{}', using {} (E = {:e} Pa)",
                    material_id,
                    self.fallback.id(),
                    self.fallback.e_pa()
                );
                self.fallback.e_pa()
            }
        }
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog::standard()
    }
}

/// Resolve an elastic modulus (Pa) against the global catalog
pub fn elastic_modulus(material_id: &str, custom_gpa: Option<f64>) -> f64 {
    MaterialCatalog::global().elastic_modulus(material_id, custom_gpa)
}
