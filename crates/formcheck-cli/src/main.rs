mod commands;
mod sink;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formcheck::Config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "formcheck - validate sign-up form submissions", long_about = None)]
struct Cli {
    /// Config file (defaults to ./formcheck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one submission and print the error block
    Check {
        /// Fields as name=value pairs, in form order
        fields: Vec<String>,

        /// Read fields from a JSON array of {name, value, kind} ("-" for stdin)
        #[arg(long, conflicts_with = "fields")]
        json: Option<PathBuf>,
    },

    /// List the fields the active schema validates
    Fields,

    /// Run a single rule against a value
    Rule {
        /// required_string, without_numbers, email_format or min_length
        kind: String,

        /// Value to check
        value: String,

        /// Minimum length (min_length only)
        #[arg(long)]
        count: Option<usize>,

        /// Message reported on failure
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load_default()?,
    };

    init_tracing(&config.logging.level, cli.verbose);

    match cli.command {
        Commands::Check { fields, json } => commands::check::execute(&config, &fields, json.as_deref()),
        Commands::Fields => commands::fields::execute(&config),
        Commands::Rule {
            kind,
            value,
            count,
            message,
        } => commands::rule::execute(&kind, &value, count, message),
    }
}

/// Logs go to stderr so stdout only carries the report
fn init_tracing(configured: &str, verbose: u8) {
    let level = match verbose {
        0 => Level::from_str(configured).unwrap_or_else(|_| {
            eprintln!("Unknown log level '{}', using info", configured);
            Level::INFO
        }),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
