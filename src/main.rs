mod cli;
mod config;
mod error;
mod models;
mod records;
mod scoring;
mod stats;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };

    match cli.command {
        // Config commands manage the file itself, so they load it on their own
        Commands::Config { action } => {
            handlers::handle_config(&config_path, &action)?;
        }
        Commands::Template { date } => {
            handlers::handle_template(date)?;
        }
        cmd => {
            let mut config = AppConfig::load(&config_path)?;
            match cmd {
                Commands::Score { file, json } => {
                    handlers::handle_score(&config, &file, json)?;
                }
                Commands::History { paths, json } => {
                    handlers::handle_history(&config, &paths, json)?;
                }
                Commands::Target { points } => {
                    handlers::handle_target(&config_path, &mut config, points)?;
                }
                Commands::Deed { action } => {
                    handlers::handle_deed(&config_path, &mut config, &action)?;
                }
                Commands::Config { .. } | Commands::Template { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
