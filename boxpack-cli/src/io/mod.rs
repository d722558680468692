use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use boxpack::io::ext_repr::ExtPackRequest;
use log::{Level, LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::PackerConfig;

pub mod cli;
pub mod output;

pub fn read_request(path: &Path) -> Result<ExtPackRequest> {
    let file = File::open(path)
        .with_context(|| format!("could not open request file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse request file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<PackerConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "Solution JSON written to file://{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .display()
    );
    Ok(())
}

/// Logs to stdout, every line prefixed with its level, the time elapsed since [`EPOCH`] and the thread.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let prefix = log_prefix(record.level(), EPOCH.elapsed(), handle.name());
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] epoch: {}", jiff::Timestamp::now());
    Ok(())
}

/// `[LEVEL] [hh:mm:ss] <thread>`, unnamed threads (rayon workers) show as `-`
pub fn log_prefix(level: Level, elapsed: Duration, thread_name: Option<&str>) -> String {
    let secs = elapsed.as_secs();
    format!(
        "[{level}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        thread_name.unwrap_or("-")
    )
}
