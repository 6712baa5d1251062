//! # Beamline CLI Application
//!
//! Console front end for beam_core. Collects beam parameters (from a JSON
//! inputs file or interactive prompts with defaults), runs the analysis and
//! prints a summary followed by the full JSON result.
//!
//! ## Usage
//!
//! ```text
//! beam_cli [INPUTS.json] [--save RESULT.json] [--strict]
//! ```
//!
//! Set `RUST_LOG=debug` to see engine logging.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use beam_core::file_io::{load_inputs, save_result};
use beam_core::materials::CUSTOM_MATERIAL_ID;
use beam_core::{BeamInputs, CalcError, CalcResult, LoadType};

/// Parsed command-line options
#[derive(Debug, Default)]
struct Options {
    inputs_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    strict: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--save" => match args.next() {
                Some(path) => options.save_path = Some(PathBuf::from(path)),
                None => return Err("--save requires a path".to_string()),
            },
            "--strict" => options.strict = true,
            "-h" | "--help" => {
                return Err("usage: beam_cli [INPUTS.json] [--save RESULT.json] [--strict]".to_string())
            }
            other if other.starts_with("--") => return Err(format!("unknown option '{}'", other)),
            other => {
                if options.inputs_path.is_some() {
                    return Err(format!("unexpected argument '{}'", other));
                }
                options.inputs_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok(options)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_inputs() -> BeamInputs {
    let defaults = BeamInputs::default();

    println!("Press Enter to accept the [default].");
    println!();

    let beam_type = prompt_line("Beam type (simply-supported, fixed-fixed, cantilever) [simply-supported]: ")
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.beam_type);
    let load_type = prompt_line("Load type (point, distributed, moment) [point]: ")
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.load_type);
    let material = prompt_line("Material (steel, aluminum, copper, wood, custom) [steel]: ")
        .unwrap_or_else(|| defaults.material.clone());
    let custom_modulus_gpa = if material == CUSTOM_MATERIAL_ID {
        Some(prompt_f64("Custom elastic modulus (GPa) [200.0]: ", 200.0))
    } else {
        None
    };

    let length = prompt_f64("Span length L (m) [2.0]: ", defaults.length);
    let width = prompt_f64("Section width b (m) [0.1]: ", defaults.width);
    let height = prompt_f64("Section height h (m) [0.15]: ", defaults.height);

    let mut inputs = BeamInputs {
        beam_type,
        load_type,
        material,
        custom_modulus_gpa,
        length,
        width,
        height,
        ..defaults
    };

    match load_type {
        LoadType::Point => {
            inputs.point_load = prompt_f64("Point load P (N) [10000]: ", inputs.point_load);
        }
        LoadType::Distributed => {
            inputs.distributed_load = prompt_f64("Distributed load q (N/m) [5000]: ", inputs.distributed_load);
        }
        LoadType::Moment => {
            inputs.applied_moment = prompt_f64("Applied moment M0 (N·m) [5000]: ", inputs.applied_moment);
        }
        LoadType::Unknown => {}
    }

    if matches!(load_type, LoadType::Point | LoadType::Moment) {
        let prompt = format!("Load position a (m from left) [{:.3}]: ", length / 2.0);
        inputs.load_position = prompt_line(&prompt).and_then(|s| s.parse().ok());
    }

    inputs
}

fn run(options: &Options) -> CalcResult<()> {
    let inputs = match &options.inputs_path {
        Some(path) => {
            log::info!("reading inputs from {}", path.display());
            load_inputs(path)?
        }
        None => prompt_inputs(),
    };

    if options.strict {
        inputs.validate_strict()?;
    }

    let section = inputs.section()?;
    let config = inputs.to_configuration()?;
    let result = beam_core::analyze(&config)?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Support:  {}", config.beam_type);
    println!("  Load:     {}", config.load_type);
    println!("  Span:     {:.3} m", config.length);
    println!("  Section:  {:.0} × {:.0} mm", section.width * 1000.0, section.height * 1000.0);
    println!("  E:        {:.1} GPa ({})", config.elastic_modulus / 1.0e9, inputs.material);
    if matches!(config.load_type, LoadType::Point | LoadType::Moment) {
        println!("  a:        {:.3} m", config.load_position);
    }
    println!();
    println!("Response:");
    println!("  EI      = {:.4e} N·m²", result.ei);
    println!("  δ_max   = {:.4} mm", result.max_deflection * 1000.0);
    println!("  θ_max   = {:.6} rad", result.max_slope);
    println!("  M_max   = {:.1} N·m", result.max_moment);
    println!("  V_max   = {:.1} N", result.max_shear);
    println!("  σ_max   = {:.2} MPa", result.peak_bending_stress(&section) / 1.0e6);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    let json = serde_json::to_string_pretty(&result).map_err(CalcError::serialization)?;
    println!("{}", json);

    if let Some(path) = &options.save_path {
        save_result(&result, path)?;
        println!();
        println!("Saved result to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Beamline CLI - Beam Response Calculator");
    println!("=======================================");
    println!();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
