//! # Beam Calculations
//!
//! Calculation drivers that turn a configuration into sampled results.
//! Each calculation follows the pattern:
//!
//! - `*Configuration` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `analyze(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam_analysis`] - Single-span response curves for three support types

pub mod beam_analysis;

// Re-export commonly used types
pub use beam_analysis::{analyze, AnalysisResult, BeamConfiguration, BeamType, LoadType};
