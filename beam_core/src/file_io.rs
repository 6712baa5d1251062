//! # File I/O Module
//!
//! JSON persistence for the two values that cross the engine boundary:
//! - **Inputs**: read a [`BeamInputs`] file (missing fields take defaults)
//! - **Results**: save an [`AnalysisResult`] with atomic write semantics
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_inputs, save_result};
//! use std::path::Path;
//!
//! let inputs = load_inputs(Path::new("beam.json"))?;
//! let result = inputs.analyze()?;
//! save_result(&result, Path::new("beam.result.json"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::calculations::beam_analysis::AnalysisResult;
use crate::errors::{CalcError, CalcResult};
use crate::inputs::BeamInputs;

/// Load analysis inputs from a JSON file.
pub fn load_inputs(path: &Path) -> CalcResult<BeamInputs> {
    read_json(path)
}

/// Load a previously saved analysis result.
pub fn load_result(path: &Path) -> CalcResult<AnalysisResult> {
    read_json(path)
}

/// Save an analysis result to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize result to JSON
/// 2. Write to a temporary file (`<path>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
///
/// A reader never observes a half-written result file.
pub fn save_result(result: &AnalysisResult, path: &Path) -> CalcResult<()> {
    write_json_atomic(result, path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(CalcError::serialization)
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(CalcError::serialization)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    drop(tmp_file);

    fs::rename(tmp_path, path).map_err(|e| {
        // Clean up the orphaned temp file before reporting
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename temp file", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved {}", path.display());
    Ok(())
}
