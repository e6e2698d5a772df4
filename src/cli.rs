use std::path::PathBuf;

use clap::Parser;

/// Guess the number under a shower of falling leaves.
#[derive(Parser, Debug)]
pub struct Args {
    /// Seed for a reproducible session (targets, leaves and fireworks).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write debug logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
