//! The binary entry point for the voxcensus exporter.

use std::process::ExitCode;

use clap::Parser;
use voxcensus_config::{CliArgs, Config};
use voxcensus_core::{RunSettings, run};
use voxcensus_world::{IdentityTranslator, SnapshotWorld};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(Config::default_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    voxcensus_log::init_logging(Some(&config));

    let mut world = match SnapshotWorld::open(&args.world) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let settings = RunSettings {
        radius: config.export.radius,
        dimension: config.export.dimension.clone(),
        empty_voxel: config.export.empty_voxel.clone(),
        world_height: config.export.world_height,
        output: config.export.output.clone(),
    };

    match run(&mut world, &IdentityTranslator, &settings) {
        Ok(summary) => {
            println!(
                "{} processed, {} skipped ({} block types, {} biome types)",
                summary.processed,
                summary.skipped,
                summary.distinct_blocks,
                summary.distinct_biomes
            );
            println!("CSV written: {}", settings.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
