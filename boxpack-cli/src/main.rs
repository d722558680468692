use std::fs;

use anyhow::{Context, Result};
use boxpack_cli::config::PackerConfig;
use boxpack_cli::io;
use boxpack_cli::io::cli::Cli;
use boxpack_cli::io::output::PackOutput;
use boxpack_cli::request::pack_request;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackerConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed PackerConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_request = io::read_request(&args.input_file)?;
    let ext_response = pack_request(&ext_request, &config)?;

    let output = PackOutput {
        request: ext_request,
        response: ext_response,
        config,
    };

    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)
}
