pub mod compare;
pub mod summarise;
pub mod xml2csv;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fwaudit")]
#[command(about = "Flatten, summarise and compare Windows firewall telemetry.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory the output tables are written to
    #[arg(short, long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    /// Show debug logging (repeat for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less output: once hides headers, twice hides everything but warnings
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a firewall Group Policy XML export into one CSV per rule type
    #[command(alias = "x")]
    Xml2csv {
        #[arg(default_value = "example.xml")]
        export: PathBuf,
    },
    /// Summarise a firewall activity CSV export into per-rule usage tables
    #[command(alias = "s")]
    Summarise { csv_export: PathBuf },
    /// Compare two summaries of the same direction
    #[command(alias = "c")]
    Compare { first: PathBuf, updated: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
