//! # beam_core - Closed-Form Beam Response Engine
//!
//! `beam_core` computes Euler-Bernoulli deflection, slope, bending moment and
//! shear along a single prismatic span, for three support conditions and
//! three load kinds, and reduces the curves to peak values and bending
//! stress. All inputs and outputs are JSON-serializable so front ends
//! (renderers, diagram plotters, CLIs) can consume them directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `analyze` is a pure function; identical input gives bit-identical output
//! - **Permissive**: unknown beam/load types give a zero response, unknown materials resolve to steel
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::inputs::BeamInputs;
//!
//! // 2 m steel beam, 100 × 150 mm, 10 kN at midspan
//! let result = BeamInputs::default().analyze().unwrap();
//!
//! // M = PL/4 under the load
//! assert!((result.max_moment - 5000.0).abs() < 1e-6);
//!
//! let json = serde_json::to_string(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Configuration, dispatch and sampling (`analyze`)
//! - [`equations`] - Closed-form solutions per support condition, section formulas
//! - [`materials`] - Material catalog and elastic modulus lookup
//! - [`section`] - Validated rectangular cross-section
//! - [`inputs`] - Front-end parameter set with defaults and clamping
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON load of inputs, atomic save of results

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod inputs;
pub mod materials;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisResult, BeamConfiguration, BeamType, LoadType};
pub use equations::section::{bending_stress as stress, max_bending_stress as max_stress};
pub use equations::Response;
pub use errors::{CalcError, CalcResult};
pub use inputs::BeamInputs;
pub use materials::{elastic_modulus, MaterialCatalog};
pub use section::{moment_of_inertia, CrossSection};
