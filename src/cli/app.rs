//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, SplitArgs};
use crate::output::OutputMode;

/// journalsplit - split concatenated plaintext journals into per-entry files
#[derive(Parser, Debug)]
#[command(
    name = "journalsplit",
    version,
    about = "Split concatenated plaintext journals into one file per entry",
    long_about = "Scan a flat plaintext journal line by line and split it into one\n\
                  file per entry, inferring boundaries from a sliding window of\n\
                  lines that must match a title/date/blank-lines pattern."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split every configured journal into per-entry files
    Split {
        /// Path to the journal configuration file
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Directory holding the plaintext inputs
        #[arg(long, default_value = "plaintexts")]
        input_dir: PathBuf,

        /// Directory the per-year entry directories are created under
        #[arg(long, default_value = "entries-new")]
        output_dir: PathBuf,

        /// Count entries and report without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Split {
            config,
            input_dir,
            output_dir,
            dry_run,
        }) => commands::split(
            &SplitArgs {
                config,
                input_dir,
                output_dir,
                dry_run,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("journalsplit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("journalsplit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'journalsplit --help' for usage");
                println!("Run 'journalsplit split' to process configured journals");
            }
            Ok(())
        },
    }
}
