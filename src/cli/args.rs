use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ibadah", version, author, about = "Score your daily worship against a personal target")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one day's record and show where the points came from
    Score {
        /// Record file (JSON)
        file: PathBuf,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score many days and show trend, streaks and badges
    History {
        /// Record files, or directories of *.json records
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print scores and summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print an empty record for a date, ready to fill in
    Template {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Set the daily target in points
    Target {
        points: i64,
    },
    /// Weight configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Custom deeds
    Deed {
        #[command(subcommand)]
        action: DeedCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[derive(Subcommand, Debug)]
pub enum DeedCommands {
    /// List configured custom deeds
    List,
    /// Add a custom deed
    Add {
        /// Identifier used in records
        id: String,
        /// Display label
        label: String,
        /// Points earned on a day it is marked done
        points: f64,
    },
    /// Remove a custom deed (past records that mention it then score 0 for it)
    Remove {
        id: String,
    },
}
