//! # wavy
//!
//! Turns a path into a wavy outline of itself.
//!
//! ## Commands
//! - `outline`: Print the wave outline of a path as SVG path data
//! - `settings`: Print the effective wave settings as JSON
//! - `waves`: List the built-in waveforms
//! - `shapes`: List the built-in sample paths

mod config;
mod shapes;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use wave_core::{compute_wave_outline, ArcLengthPath, PathMeasure, WaveShape};

use config::Overrides;

#[derive(Parser)]
#[command(name = "wavy")]
#[command(about = "Displace a path along its normals with a periodic wave")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the wave outline of a path
    Outline {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        wave: WaveArgs,
    },

    /// Print the effective settings as JSON
    Settings {
        #[command(flatten)]
        wave: WaveArgs,
    },

    /// List the built-in waveforms
    Waves,

    /// List the built-in sample paths
    Shapes,
}

#[derive(Args)]
struct SourceArgs {
    /// SVG path data to wave
    #[arg(short, long, conflicts_with = "shape")]
    path: Option<String>,

    /// Built-in sample path: "squiggle", "heart", "rect"
    #[arg(short, long, default_value = "squiggle")]
    shape: String,
}

#[derive(Args)]
struct WaveArgs {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Wave cycles over the whole path
    #[arg(short, long, allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Maximum displacement, in path units
    #[arg(short, long, allow_negative_numbers = true)]
    amplitude: Option<f64>,

    /// Phase offset as a fraction of a cycle (0..1)
    #[arg(long, allow_negative_numbers = true)]
    phase: Option<f64>,

    /// Sample every N path units
    #[arg(short, long, conflicts_with = "subdivisions", allow_negative_numbers = true)]
    resolution: Option<f64>,

    /// Sample at N equal subdivisions of the path
    #[arg(long, allow_negative_numbers = true)]
    subdivisions: Option<i64>,

    /// Round output coordinates to N decimal places
    #[arg(short, long)]
    decimals: Option<u32>,

    /// Waveform: "sine", "saw", "square"
    #[arg(short, long)]
    wave: Option<WaveShape>,
}

impl WaveArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            frequency: self.frequency,
            amplitude: self.amplitude,
            phase: self.phase,
            resolution: self.resolution,
            subdivisions: self.subdivisions,
            decimals: self.decimals,
            wave: self.wave,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wavy=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Outline { source, wave } => cmd_outline(&source, &wave),
        Commands::Settings { wave } => cmd_settings(&wave),
        Commands::Waves => cmd_waves(),
        Commands::Shapes => cmd_shapes(),
    }
}

/// Compute and print the outline of the selected path.
fn cmd_outline(source: &SourceArgs, wave: &WaveArgs) -> Result<()> {
    let data = match &source.path {
        Some(data) => data.as_str(),
        None => match shapes::find(&source.shape) {
            Some(shape) => shape.data,
            None => bail!(
                "Unknown shape '{}' (run `wavy shapes` for the list)",
                source.shape
            ),
        },
    };

    let settings = config::resolve(wave.settings.as_deref(), &wave.overrides())?;
    let measure = PathMeasure::from_svg(data).context("Failed to parse source path")?;
    info!(
        length = measure.total_length(),
        segments = measure.segment_count(),
        waveform = %settings.waveform,
        "waving path"
    );

    let outline = compute_wave_outline(&measure, &settings);
    if outline.is_empty() {
        warn!("source path has no length, nothing to output");
    }
    println!("{}", outline);
    Ok(())
}

fn cmd_settings(wave: &WaveArgs) -> Result<()> {
    let settings = config::resolve(wave.settings.as_deref(), &wave.overrides())?;
    println!("{}", settings.to_json_pretty()?);
    Ok(())
}

fn cmd_waves() -> Result<()> {
    println!("Available Waveforms:");
    println!("====================");
    for shape in WaveShape::ALL {
        println!("  {}", shape);
    }
    Ok(())
}

fn cmd_shapes() -> Result<()> {
    println!("Available Shapes:");
    println!("=================");
    for shape in shapes::SHAPES {
        println!("  {:<10} {}", shape.name, shape.description);
        println!("  {:<10} {}", "", shape.data);
    }
    Ok(())
}
