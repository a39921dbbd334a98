//! Split every configured journal into per-entry files

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local};
use log::{info, warn};

use crate::adapters::{charclean, ChronoDateOracle, DirEntrySink};
use crate::config::JournalConfig;
use crate::core::ports::{DateOracle, DiscardSink};
use crate::core::splitter::StreamSplitter;
use crate::output::{BatchReport, OutputMode, RunReport};

/// Arguments for the split command
#[derive(Debug, Clone)]
pub struct SplitArgs {
    /// Path to the journal configuration file
    pub config: PathBuf,
    /// Directory holding the plaintext inputs
    pub input_dir: PathBuf,
    /// Directory the per-year entry directories are created under
    pub output_dir: PathBuf,
    /// Count entries without writing anything
    pub dry_run: bool,
}

/// Process every configured journal sequentially and report the tally
pub fn split(args: &SplitArgs, mode: OutputMode) -> anyhow::Result<()> {
    let configs = JournalConfig::load_all(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let oracle = ChronoDateOracle::new();
    let current_year = Local::now().year();

    let mut journals = Vec::with_capacity(configs.len());
    let mut total_entries = 0;

    for config in &configs {
        let count = run_journal(config, args, &oracle, current_year)
            .with_context(|| format!("journal {}", config.input_filename))?;
        if count != config.expected_output {
            warn!(
                "{}: expected {} entries, found {}",
                config.input_filename, config.expected_output, count
            );
        }
        total_entries += count;
        journals.push(RunReport::new(
            config.input_filename.clone(),
            config.expected_output,
            count,
        ));
    }

    BatchReport {
        journals,
        total_entries,
    }
    .render(mode);

    Ok(())
}

/// Run one journal start to finish, returning its entry count
fn run_journal(
    config: &JournalConfig,
    args: &SplitArgs,
    oracle: &dyn DateOracle,
    current_year: i32,
) -> anyhow::Result<usize> {
    let input = input_path(config, args)?;
    info!("scanning {}", input.display());

    let reader = BufReader::new(
        File::open(&input).with_context(|| format!("opening {}", input.display()))?,
    );
    let anomalies = config.anomalies();

    let count = if args.dry_run {
        let mut sink = DiscardSink;
        StreamSplitter::new(config, oracle, &anomalies, &mut sink, current_year).run(reader)?
    } else {
        let dir = args.output_dir.join(config.year.to_string());
        let mut sink = DirEntrySink::create(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        StreamSplitter::new(config, oracle, &anomalies, &mut sink, current_year).run(reader)?
    };

    Ok(count)
}

/// Locate the journal's input, running the pre-clean pass if configured
///
/// Dry runs skip the pass and read the raw file, matching the original
/// print-only behavior.
fn input_path(config: &JournalConfig, args: &SplitArgs) -> anyhow::Result<PathBuf> {
    let raw = args.input_dir.join(format!("{}.txt", config.input_filename));
    if !config.needs_char_clean || args.dry_run {
        return Ok(raw);
    }
    let cleaned = args
        .input_dir
        .join(format!("{}-charcleaned.txt", config.input_filename));
    charclean::clean_file(&raw, &cleaned)
        .with_context(|| format!("pre-cleaning {}", raw.display()))?;
    Ok(cleaned)
}
