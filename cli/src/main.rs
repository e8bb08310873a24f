mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Commands, compare, summarise, xml2csv};
use fwaudit_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config {
        output_dir: commands.output_dir,
        quiet: commands.quiet,
    };
    std::fs::create_dir_all(&cfg.output_dir).with_context(|| {
        format!("cannot create output directory {}", cfg.output_dir.display())
    })?;

    match commands.command {
        Commands::Xml2csv { export } => {
            print::header("flattening policy export", cfg.quiet);
            xml2csv::xml2csv(&export, &cfg)
        }
        Commands::Summarise { csv_export } => {
            print::header("summarising firewall activity", cfg.quiet);
            summarise::summarise(&csv_export, &cfg)
        }
        Commands::Compare { first, updated } => {
            print::header("comparing summaries", cfg.quiet);
            compare::compare(&first, &updated, &cfg)
        }
    }
}
