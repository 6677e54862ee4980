//! CLI command definitions and handlers

mod audit;
mod benchmarks;
mod init;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// QuietAudit - operations audit for hospitality venues
///
/// 100% LOCAL - runs against a JSON snapshot of your numbers. Nothing
/// leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "quietaudit")]
#[command(
    version,
    about = "Quiet operations audit for hospitality venues — score seven operational modules and surface recoverable money",
    long_about = "QuietAudit scores a venue across seven operational modules (food, beverage, \
labour, overhead, service, marketing, compliance) against venue-type benchmarks, \
flags compliance red lines, and turns the gaps into a priced recovery plan.\n\n\
100% LOCAL — runs against a JSON snapshot of your numbers.",
    after_help = "\
Examples:
  quietaudit init                        Write a sample snapshot + config
  quietaudit audit snapshot.json         Audit a venue snapshot
  quietaudit audit snapshot.json -f json JSON output for scripting
  quietaudit summary snapshot.json       Recovery plan only
  quietaudit benchmarks --venue-type bar_pub  Show benchmark targets for pubs"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full audit against a venue snapshot
    #[command(after_help = "\
Examples:
  quietaudit audit snapshot.json                     Terminal report
  quietaudit audit snapshot.json --format markdown   Full action plan as Markdown
  quietaudit audit snapshot.json -f json -o out.json Machine-readable result
  quietaudit audit snapshot.json --summary           Append the recovery plan")]
    Audit {
        /// Path to the venue snapshot (JSON)
        input: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Also render the recovery plan after the report
        #[arg(long)]
        summary: bool,
    },

    /// Render just the recovery plan (found money + action buckets)
    Summary {
        /// Path to the venue snapshot (JSON)
        input: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,
    },

    /// Write a sample snapshot and a starter quietaudit.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the benchmark targets for a venue type
    Benchmarks {
        /// Venue type: cafe, casual_dining, fine_dining, bar_pub, fast_casual
        #[arg(long, default_value = "casual_dining")]
        venue_type: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Audit {
            input,
            format,
            output,
            summary,
        } => audit::run(&input, format.as_deref(), output.as_deref(), summary),
        Commands::Summary { input, format } => summary::run(&input, format.as_deref()),
        Commands::Init { path } => init::run(&path),
        Commands::Benchmarks { venue_type } => benchmarks::run(&venue_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_audit_args() {
        let cli = Cli::try_parse_from(["quietaudit", "audit", "snap.json", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Audit { input, format, .. } => {
                assert_eq!(input.to_str(), Some("snap.json"));
                assert_eq!(format.as_deref(), Some("json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["quietaudit", "audit", "s.json", "-f", "sarif"]).is_err());
    }
}
