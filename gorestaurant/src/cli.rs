use clap::Parser;
use std::path::PathBuf;

/// Terminal client for ordering a dish from a GoRestaurant backend.
#[derive(Parser, Debug)]
#[command(name = "gorestaurant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Id of the food to open.
    pub food_id: u64,

    /// Path to a TOML config file (defaults to $GORESTAURANT_CONFIG, then config.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
