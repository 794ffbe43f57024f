//! Cargar CLI - probe model files the way the loader will see them
//!
//! # Commands
//!
//! - `check` - open and map a model file, report whether it would load
//! - `info` - print model file metadata (text or JSON)
//!
//! The CLI uses a probe backend that accepts any mappable, non-empty buffer.
//! It tells you whether the file can be opened and mapped, not whether any
//! particular inference library will accept its contents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cargar::{load, InterpreterBackend, MappedModel};

/// Cargar - memory-mapped model loading probe
#[derive(Parser)]
#[command(name = "cargar")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open and map a model file, reporting the typed load outcome
    ///
    /// Examples:
    ///   cargar check assets/model.tflite
    Check {
        /// Path to the model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },
    /// Print model file metadata
    ///
    /// Examples:
    ///   cargar info assets/model.tflite
    ///   cargar info assets/model.tflite --format json
    Info {
        /// Path to the model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// Backend that accepts every buffer the loader hands it. Construction
/// proves the open and map steps; no inference library is involved.
struct ProbeBackend;

/// Probe handle: just the mapped length.
struct ProbeHandle {
    model_len: usize,
}

impl InterpreterBackend for ProbeBackend {
    type Handle = ProbeHandle;

    fn create_interpreter(&self, model_data: &[u8]) -> Result<Self::Handle, String> {
        Ok(ProbeHandle {
            model_len: model_data.len(),
        })
    }
}

fn run_check(model: &PathBuf) -> ExitCode {
    match load(model, &ProbeBackend) {
        Ok(interpreter) => {
            let len = interpreter.handle().map_or(0, |h| h.model_len);
            println!("ok: {} ({len} bytes mapped)", model.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run_info(model: &PathBuf, format: &str) -> ExitCode {
    let mapped = match MappedModel::from_path(model) {
        Ok(mapped) => mapped,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        },
    };

    match format {
        "json" => match serde_json::to_string_pretty(mapped.metadata()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            },
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            },
        },
        "text" => {
            let meta = mapped.metadata();
            println!("path:  {}", meta.path.display());
            println!("size:  {} bytes", meta.file_size);
            ExitCode::SUCCESS
        },
        other => {
            eprintln!("error: unknown format {other:?} (expected text or json)");
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check { model } => run_check(&model),
        Commands::Info { model, format } => run_info(&model, &format),
    }
}
