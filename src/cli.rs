use std::path::PathBuf;

use clap::Parser;

/// Watches the opening hours of places listed by the tourism backend.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// Print one JSON status line per place and exit instead of polling.
    #[arg(long)]
    pub once: bool,

    /// Config file to load. Defaults to `config.json`.
    #[arg(long, short = 'c', value_name = "FILE", env = "PLACE_HOURS_CONFIG")]
    pub config: Option<PathBuf>,
}
