use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs the orders of a request document into boxes of a catalog
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Request document (JSON) holding the orders to pack
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving the solution file `sol_<input stem>.json`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Packer configuration (JSON): catalog, fit test and maximum order size.
    /// Defaults are used for the whole configuration if absent, and for every missing key
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity of the log written to stdout
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
