//! Output formatting for human and JSON modes
//!
//! Run reports are advisory: a count mismatch is rendered as a warning
//! but never fails the batch.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of one journal run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The journal's input filename
    pub journal: String,
    /// Configured expected entry count
    pub expected: usize,
    /// Entries actually written
    pub actual: usize,
    /// Whether the counts agree
    pub matched: bool,
}

impl RunReport {
    /// Build a report for one journal
    #[must_use]
    pub fn new(journal: String, expected: usize, actual: usize) -> Self {
        let matched = expected == actual;
        Self {
            journal,
            expected,
            actual,
            matched,
        }
    }

    fn render_human(&self) {
        if self.matched {
            println!(
                "{}",
                format!(
                    "Success! {} entries written from {}.txt",
                    self.actual, self.journal
                )
                .green()
            );
        } else {
            println!(
                "{}",
                format!(
                    "WARNING: expected {} entries, found {} in {}.txt",
                    self.expected, self.actual, self.journal
                )
                .yellow()
            );
        }
    }
}

/// Outcome of a whole batch
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Per-journal reports, in processing order
    pub journals: Vec<RunReport>,
    /// Entries written across all journals
    pub total_entries: usize,
}

impl BatchReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for report in &self.journals {
            report.render_human();
        }
        println!("\nTOTAL ENTRY COUNT: {}", self.total_entries);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
