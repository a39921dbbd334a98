//! Stream splitter - drives the line-by-line scan
//!
//! Owns the sliding window, consults the boundary detector after every
//! push once the window is at capacity, and rotates the entry sink when a
//! boundary is confirmed. At end of input the remaining buffered lines
//! belong to the last entry and are flushed verbatim.

use std::io::BufRead;

use log::debug;
use thiserror::Error;

use crate::config::JournalConfig;
use crate::core::anomalies::AnomalyRegistry;
use crate::core::detector::{BoundaryCheck, EntryBoundaryDetector};
use crate::core::naming::{self, NamingError};
use crate::core::ports::{DateOracle, EntrySink};
use crate::core::window::SlidingWindow;

/// Errors that abort a journal run
#[derive(Debug, Error)]
pub enum SplitError {
    /// Reading the input or writing an entry failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A boundary's date line could not be resolved
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// A dateless entry matched before any dated entry supplied a date to
    /// reuse
    #[error("dateless entry {0:?} found before any dated entry")]
    DatelessWithoutDate(String),
}

/// One journal's scan: window, detector inputs, sink, and tally
pub struct StreamSplitter<'a> {
    window: SlidingWindow,
    oracle: &'a dyn DateOracle,
    anomalies: &'a AnomalyRegistry,
    sink: &'a mut dyn EntrySink,
    journal_year: i32,
    current_year: i32,
    last_date: Option<String>,
    entries: usize,
}

impl std::fmt::Debug for StreamSplitter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSplitter")
            .field("window", &self.window)
            .field("entries", &self.entries)
            .field("last_date", &self.last_date)
            .finish_non_exhaustive()
    }
}

impl<'a> StreamSplitter<'a> {
    /// Build a splitter for one journal run
    ///
    /// `current_year` is the real-world year, injected so the
    /// year-substitution rule stays testable.
    #[must_use]
    pub fn new(
        config: &JournalConfig,
        oracle: &'a dyn DateOracle,
        anomalies: &'a AnomalyRegistry,
        sink: &'a mut dyn EntrySink,
        current_year: i32,
    ) -> Self {
        Self {
            window: config.window(),
            oracle,
            anomalies,
            sink,
            journal_year: config.year,
            current_year,
            last_date: None,
            entries: 0,
        }
    }

    /// Scan the input to exhaustion and return the entry count
    pub fn run(&mut self, mut reader: impl BufRead) -> Result<usize, SplitError> {
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            self.accept(std::mem::take(&mut line))?;
        }
        // whatever is still buffered belongs to the last entry; its
        // closing boundary is end-of-file itself
        for leftover in self.window.drain() {
            self.sink.write_line(&leftover)?;
        }
        self.sink.finish()?;
        Ok(self.entries)
    }

    /// Push one line and react to the resulting window state
    fn accept(&mut self, line: String) -> Result<(), SplitError> {
        if let Some(evicted) = self.window.push(line) {
            // lags one line behind the boundary check: the freshest
            // `capacity` lines are inspected while the oldest is committed
            self.sink.write_line(&evicted)?;
        }
        if !self.window.is_full() {
            return Ok(());
        }
        let detector = EntryBoundaryDetector::new(self.oracle, self.anomalies);
        match detector.check(&self.window) {
            BoundaryCheck::Boundary { swapped } => {
                if swapped {
                    debug!("swapping title/date offsets after entry {}", self.entries);
                    self.window.swap_title_and_date();
                }
                let Some((raw_title, raw_date)) = self.window.title_and_date() else {
                    return Ok(());
                };
                let resolved = naming::resolve_date(
                    &raw_date,
                    self.oracle,
                    self.anomalies,
                    self.journal_year,
                    self.current_year,
                )?;
                self.open_entry(&raw_title, raw_date.trim(), &resolved)?;
            },
            BoundaryCheck::NotABoundary => {
                if let Some(title) = detector.match_dateless(&self.window) {
                    let title = title.to_string();
                    let resolved = self
                        .last_date
                        .clone()
                        .ok_or_else(|| SplitError::DatelessWithoutDate(title.clone()))?;
                    let header_date = resolved.clone();
                    self.open_entry(&title, &header_date, &resolved)?;
                }
            },
        }
        Ok(())
    }

    /// Rotate the sink to a new entry and reset the window
    fn open_entry(
        &mut self,
        raw_title: &str,
        header_date: &str,
        resolved_date: &str,
    ) -> Result<(), SplitError> {
        let filename = naming::entry_filename(resolved_date, raw_title);
        debug!("entry {}: {filename}", self.entries + 1);
        self.sink.start_entry(&filename, raw_title.trim(), header_date)?;
        self.last_date = Some(resolved_date.to_string());
        self.window.clear();
        self.entries += 1;
        Ok(())
    }
}
