use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod request;

/// Instant the process started, all log timestamps are relative to it
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
