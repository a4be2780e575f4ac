//! identicon: CLI for generating deterministic pixel-art identicons.
//!
//! Hashes an input string (or a freshly generated random seed) into a
//! symmetric colored grid and writes the result as a PNG file, or prints
//! it base64-encoded to stdout.
//!
//! # Usage
//!
//! ```text
//! identicon <INPUT> [-o out.png]
//! identicon --random
//! identicon <INPUT> --base64
//! identicon <INPUT> --json
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::Parser;
use identicon_pipeline::{CanvasConfig, generate_staged};
use identicon_render::render_png;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of seed strings generated by `--random`.
const RANDOM_SEED_LEN: usize = 16;

/// Generate a deterministic pixel-art identicon from an input string.
///
/// The same input always produces the same image; different inputs
/// produce visually distinct images with high probability.
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Input string to derive the icon from.
    #[arg(required_unless_present = "random")]
    input: Option<String>,

    /// Derive the icon from a randomly generated alphanumeric seed
    /// instead of INPUT. The seed is printed to stderr.
    #[arg(long, conflicts_with = "input")]
    random: bool,

    /// Output PNG path. Defaults to "<input>.png".
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the base64-encoded PNG to stdout instead of writing a file.
    #[arg(long)]
    base64: bool,

    /// Cells per row/column of the grid.
    #[arg(long, default_value_t = CanvasConfig::DEFAULT_SIDE_LENGTH, value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..))]
    side_length: u32,

    /// Pixel width/height of one grid cell.
    #[arg(long, default_value_t = CanvasConfig::DEFAULT_CELL_SIZE, value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..))]
    cell_size: u32,

    /// Print all intermediate pipeline values (digest, color, grid,
    /// filtered grid, pixel map) as JSON to stdout and exit without
    /// producing an image.
    #[arg(long)]
    json: bool,

    /// Full canvas config as a JSON string.
    ///
    /// When provided, --side-length and --cell-size are ignored.
    /// The JSON must be a valid `CanvasConfig` serialization, e.g.
    /// '{"side_length":5,"cell_size":50}'.
    #[arg(long)]
    config_json: Option<String>,
}

/// Build the canvas configuration from CLI flags.
///
/// `--config-json` takes precedence over the scalar flags when set.
fn config_from_cli(cli: &Cli) -> Result<CanvasConfig, String> {
    match cli.config_json {
        Some(ref json) => {
            serde_json::from_str(json).map_err(|e| format!("--config-json: {e}"))
        }
        None => Ok(CanvasConfig {
            side_length: cli.side_length,
            cell_size: cli.cell_size,
        }),
    }
}

/// Generate a random alphanumeric seed string.
///
/// Randomness lives here in the CLI, never in the pipeline, so the
/// core stays a pure function of its input string.
fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SEED_LEN)
        .map(char::from)
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let input = if cli.random {
        let seed = random_seed();
        eprintln!("Generated seed: {seed}");
        seed
    } else {
        match cli.input {
            Some(input) => input,
            None => {
                // Unreachable given the clap constraints, but surfaced
                // as a plain error rather than a panic.
                eprintln!("Error: no input string provided");
                return ExitCode::FAILURE;
            }
        }
    };

    let staged = match generate_staged(&input, &config) {
        Ok(staged) => staged,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&staged) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing pipeline stages: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    eprintln!(
        "Rendering {} rectangles with color ({}, {}, {})",
        staged.pixel_map.len(),
        staged.color.r,
        staged.color.g,
        staged.color.b,
    );

    let png = match render_png(staged.color, &staged.pixel_map, &config) {
        Ok(png) => png,
        Err(e) => {
            eprintln!("Render error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.base64 {
        println!("{}", STANDARD.encode(&png));
        return ExitCode::SUCCESS;
    }

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{input}.png")));

    if let Err(e) = std::fs::write(&output_path, &png) {
        eprintln!("Error writing {}: {e}", output_path.display());
        return ExitCode::FAILURE;
    }

    eprintln!("Saved to {}", output_path.display());
    ExitCode::SUCCESS
}
