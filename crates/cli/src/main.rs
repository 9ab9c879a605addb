#![deny(unsafe_code)]
//! CLI binary for the noise-asset field generator.
//!
//! Subcommands:
//! - `generate [engine]` - compute a noise field and write it as JSON
//! - `list` - print engines and every named option

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use noise_asset_core::{Field, Generator, Seed};
use noise_asset_engines::{NoiseAsset, NoiseEngine, OctaveFunction, Smoothing, SumFunction, WorleyOutput};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noise-asset", about = "Deterministic procedural noise fields")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a noise field and write it as JSON.
    Generate {
        /// Engine name (e.g. "simplex", "worley-euclidean").
        #[arg(default_value = "simplex")]
        engine: String,

        /// Field width in pixels.
        #[arg(short = 'W', long, default_value_t = 300)]
        width: usize,

        /// Field height in pixels.
        #[arg(short = 'H', long, default_value_t = 150)]
        height: usize,

        /// Seed string for deterministic output.
        #[arg(long, default_value = "any_random_string_will_do")]
        seed: String,

        /// Attribute overrides as a JSON object (e.g. '{"octaves": 4}').
        #[arg(long, default_value = "{}")]
        params: String,

        /// Read engine, dimensions, seed and params from a recipe file.
        #[arg(long, conflicts_with_all = ["engine", "width", "height", "seed", "params"])]
        recipe: Option<PathBuf>,

        /// Output file path. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List engines and named options.
    List,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Assembles the recipe from a file or from the command-line arguments.
fn build_seed(
    engine: &str,
    width: usize,
    height: usize,
    seed: &str,
    params: &str,
    recipe: Option<&Path>,
) -> Result<Seed, CliError> {
    if let Some(path) = recipe {
        let text = fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
        return serde_json::from_str(&text)
            .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())));
    }

    let params: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut recipe = Seed::new(engine, width, height, seed);
    recipe.params = params;
    Ok(recipe)
}

/// Writes `field` as JSON to `output`, or to stdout when `None`.
fn write_field(field: &Field, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|e| CliError::Io(format!("creating {}: {e}", path.display())))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, field)?;
            writer.flush()?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            serde_json::to_writer(&mut writer, field)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = NoiseEngine::list_engines();
            let smoothing: Vec<_> = Smoothing::names().collect();
            let octave_functions: Vec<_> = OctaveFunction::names().collect();
            let sum_functions: Vec<_> = SumFunction::names().collect();
            let worley_outputs: Vec<_> = WorleyOutput::names().collect();
            if cli.json {
                let info = serde_json::json!({
                    "engines": engines,
                    "smoothing": smoothing,
                    "octaveFunctions": octave_functions,
                    "sumFunctions": sum_functions,
                    "worleyOutputs": worley_outputs,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Smoothing:");
                println!("  {}", smoothing.join(", "));
                println!("Octave functions:");
                println!("  {}", octave_functions.join(", "));
                println!("Sum functions:");
                println!("  {}", sum_functions.join(", "));
                println!("Worley outputs:");
                println!("  {}", worley_outputs.join(", "));
            }
        }
        Command::Generate {
            engine,
            width,
            height,
            seed,
            params,
            recipe,
            output,
        } => {
            let recipe = build_seed(&engine, width, height, &seed, &params, recipe.as_deref())?;
            let mut asset = NoiseAsset::from_seed(&recipe)?;
            info!(engine = %recipe.engine, width = recipe.width, height = recipe.height, "generating");

            let field = asset.field()?;
            let (min, max) = field.min_max();
            write_field(field, output.as_deref())?;

            let destination = output
                .as_ref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
            if cli.json {
                let info = serde_json::json!({
                    "engine": recipe.engine,
                    "width": recipe.width,
                    "height": recipe.height,
                    "seed": recipe.seed,
                    "min": min,
                    "max": max,
                    "output": destination,
                });
                let text = serde_json::to_string_pretty(&info)?;
                // Keep stdout clean for the field itself.
                if output.is_some() {
                    println!("{text}");
                } else {
                    eprintln!("{text}");
                }
            } else {
                eprintln!(
                    "generated {} ({}x{}, seed {:?}) -> {destination}",
                    recipe.engine, recipe.width, recipe.height, recipe.seed
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
