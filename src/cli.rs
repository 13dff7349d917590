use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tethys future-climate weather morphing.
#[derive(Parser)]
#[command(
    name = "tethys",
    version,
    about = "Morph present-day hourly weather records into future climates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Morph a weather record for every configured pathway, percentile and year.
    Morph(MorphArgs),
    /// Dump the solar geometry and sunrise/sunset markers of a site.
    Solar(SolarArgs),
}

/// Arguments for the `morph` subcommand.
#[derive(clap::Args)]
pub struct MorphArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override pathways from config (repeatable).
    #[arg(short, long = "pathway")]
    pub pathways: Vec<String>,
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Site latitude, degrees north.
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Site longitude, degrees east.
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Hours from UTC of the local standard clock.
    #[arg(long = "utc-offset", allow_hyphen_values = true)]
    pub utc_offset: f64,

    /// Site elevation, metres.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub elevation: f64,

    /// Path for the JSON table.
    #[arg(short, long, default_value = "solar.json")]
    pub output: PathBuf,
}
