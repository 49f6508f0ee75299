//! Command-line argument parsing for the voxcensus exporter.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// voxcensus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "voxcensus", about = "Per-chunk voxel statistics CSV exporter")]
pub struct CliArgs {
    /// Path to the world snapshot to read.
    pub world: PathBuf,

    /// Output CSV filename.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Radius of chunks to process (outward spiral from 0,0).
    #[arg(short, long)]
    pub radius: Option<i32>,

    /// Dimension to read chunks from.
    #[arg(long)]
    pub dimension: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref output) = args.output {
            self.export.output = output.clone();
        }
        if let Some(radius) = args.radius {
            self.export.radius = radius;
        }
        if let Some(ref dimension) = args.dimension {
            self.export.dimension = dimension.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
