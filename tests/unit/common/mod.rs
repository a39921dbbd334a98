//! Shared test fixtures and helpers
//!
//! A deterministic fake oracle and an in-memory entry sink, so the
//! window/detector/splitter logic can be tested without a real date
//! parser or a filesystem.

use std::collections::HashMap;
use std::io;

use chrono::NaiveDate;

use journalsplit::config::JournalConfig;
use journalsplit::core::ports::{DateOracle, EntrySink};

/// Oracle with an explicit, fixed vocabulary
#[derive(Debug, Default)]
pub struct FakeOracle {
    known: HashMap<String, NaiveDate>,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Teach the oracle one string (matched after trimming)
    #[must_use]
    pub fn knows(mut self, raw: &str, year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        self.known.insert(raw.to_string(), date);
        self
    }
}

impl DateOracle for FakeOracle {
    fn try_parse(&self, s: &str) -> Option<NaiveDate> {
        self.known.get(s.trim()).copied()
    }
}

/// One entry as recorded by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEntry {
    pub filename: String,
    pub title: String,
    pub date: String,
    pub body: String,
}

/// Entry sink that records everything in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub preamble: String,
    pub entries: Vec<RecordedEntry>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntrySink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.entries.last_mut() {
            Some(entry) => entry.body.push_str(line),
            None => self.preamble.push_str(line),
        }
        Ok(())
    }

    fn start_entry(&mut self, filename: &str, title: &str, date: &str) -> io::Result<()> {
        self.entries.push(RecordedEntry {
            filename: filename.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            body: String::new(),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Build an anomaly registry from string slices
pub fn registry(
    whitelist: &[(&str, &str)],
    blacklist: &[&str],
    dateless: &[&str],
) -> journalsplit::core::anomalies::AnomalyRegistry {
    journalsplit::core::anomalies::AnomalyRegistry::new(
        whitelist
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        blacklist.iter().map(|s| (*s).to_string()),
        dateless.iter().map(|s| (*s).to_string()),
    )
}

/// A minimal journal config for splitter tests
pub fn journal_config(year: i32) -> JournalConfig {
    config_from_json(&format!(
        r#"{{
            "year": {year},
            "input_filename": "test-journal",
            "expected_output": 2,
            "buffer_size": 4,
            "buffer_title_index": 0,
            "buffer_date_index": 1
        }}"#
    ))
}

/// Deserialize a single journal config object from JSON
pub fn config_from_json(json: &str) -> JournalConfig {
    let config: JournalConfig = serde_json::from_str(json).expect("valid test config");
    config.validate().expect("valid test config");
    config
}
