use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use borepack::io::ext_repr::ExtBoreInstance;
use borepack::io::svg::result_to_svg;
use borepack_cli::config::BoreCliConfig;
use borepack_cli::io;
use borepack_cli::io::cli::Cli;
use borepack_cli::solve::{create_output, report_outcomes, solve};
use clap::Parser as ClapParser;
use log::{info, warn};
use rayon::prelude::*;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BoreCliConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed BoreCliConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let outcomes = args
        .input_file
        .par_iter()
        .map(|input_file| main_instance(input_file, config, &args.solution_folder))
        .collect::<Vec<_>>();

    report_outcomes(&args.input_file, outcomes)?;

    Ok(())
}

fn main_instance(input_file: &Path, config: BoreCliConfig, output_folder: &Path) -> Result<()> {
    let input_stem = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", input_file.display()))?;

    let ext_instance: ExtBoreInstance = io::read_instance(input_file)?;

    let result = match solve(&ext_instance, &config)? {
        Ok(result) => result,
        Err(err) if err.is_input_rejection() => {
            warn!("[MAIN] {}: request rejected: {err}", ext_instance.name);
            return Ok(());
        }
        Err(err) => return Err(err).context(format!("no bore found for {}", ext_instance.name)),
    };

    {
        let svg_path: PathBuf = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = result_to_svg(&result, config.svg_draw_options, &ext_instance.name);
        io::write_svg(&svg, &svg_path)?;
    }

    {
        let output = create_output(ext_instance, &result, config);
        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
