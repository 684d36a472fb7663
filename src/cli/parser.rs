use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Explore US bikeshare trip data: popular times, stations, durations and riders
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore bikeshare trip data for Chicago, New York City and Washington",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Subcommand to run (defaults to `explore`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: pick a city, month and day, then read the reports
    Explore,

    /// Print the four reports once for the given selection
    Report {
        #[arg(long, help = "City to analyse (chicago, new york city, washington)")]
        city: String,

        #[arg(long, default_value = "all", help = "Month name or 'all'")]
        month: String,

        #[arg(long, default_value = "all", help = "Day of week or 'all'")]
        day: String,

        #[arg(long, value_name = "N", help = "Also print the first N raw rows")]
        raw: Option<usize>,

        #[arg(long, value_name = "FILE", help = "Write the reports to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite an existing export file")]
        force: bool,
    },

    /// List supported cities and where their data is expected
    Cities,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,
    },
}
