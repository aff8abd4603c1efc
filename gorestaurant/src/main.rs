use anyhow::Result;
use clap::Parser;

use gorestaurant::{cli::Cli, settings::Settings, App};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    // Logging is initialized in App::run() so nothing reaches the terminal
    App::new(settings, cli.food_id.into()).run().await?;

    Ok(())
}
