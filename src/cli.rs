use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Daily sunset events for one location, written as an iCalendar file.
#[derive(Parser)]
#[command(
    name = "sunsets",
    version,
    about = "Generate a calendar of daily sunset events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generation options.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Options for a generation run. Unset options fall back to the config
/// file, then to built-in defaults.
#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year to generate events for (defaults to the current year).
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub year: Option<i32>,

    /// First date of an explicit range (YYYY-MM-DD, inclusive).
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last date of an explicit range (YYYY-MM-DD, inclusive).
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Output ICS path (default 'sunsets.ics').
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Location name for event titles (default 'New York, NY').
    #[arg(long)]
    pub name: Option<String>,

    /// Latitude in degrees, positive north (default 40.7128).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, positive east (default -74.0060).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// IANA time zone of the location (default 'America/New_York').
    #[arg(long)]
    pub tz: Option<String>,

    /// Horizon for rise/set: sunrise-sunset, civil, nautical or astronomical.
    #[arg(long)]
    pub horizon: Option<String>,

    /// Solar algorithm: noaa (default) or spa.
    #[arg(long)]
    pub algorithm: Option<String>,
}
