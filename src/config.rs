//! Journal configuration
//!
//! Each journal's layout and anomaly overrides come from a JSON file
//! holding an array of per-journal objects. Configuration is immutable
//! once loaded; anything malformed is fatal before a run starts.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::anomalies::AnomalyRegistry;
use crate::core::window::SlidingWindow;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// The config file path
        path: PathBuf,
        /// The underlying io error
        source: io::Error,
    },

    /// Config file is not valid JSON or misses required fields
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// The config file path
        path: PathBuf,
        /// The underlying serde error
        source: serde_json::Error,
    },

    /// A buffer index does not fit inside the buffer
    #[error("journal {journal}: buffer index {index} out of range for buffer size {size}")]
    IndexOutOfRange {
        /// The journal's input filename
        journal: String,
        /// The offending index
        index: usize,
        /// The configured buffer size
        size: usize,
    },

    /// Title and date indexes point at the same slot
    #[error("journal {journal}: title and date buffer indexes must differ")]
    IndexesCollide {
        /// The journal's input filename
        journal: String,
    },

    /// The buffer cannot hold any lines
    #[error("journal {journal}: buffer size must be positive")]
    ZeroBufferSize {
        /// The journal's input filename
        journal: String,
    },
}

/// Per-journal settings, immutable once loaded
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Year the journal covers, for disambiguating year-less dates
    pub year: i32,
    /// Input file stem under the plaintext directory (no `.txt`)
    pub input_filename: String,
    /// Expected entry count, checked advisorily after the run
    pub expected_output: usize,
    /// Whether the input needs the U+2028 pre-clean pass
    #[serde(default)]
    pub needs_char_clean: bool,
    /// Window capacity in lines
    pub buffer_size: usize,
    /// Window offset of the title line
    pub buffer_title_index: usize,
    /// Window offset of the date line
    pub buffer_date_index: usize,
    /// Whether this journal sometimes transposes title and date
    #[serde(default)]
    pub ambiguous_title_date_order: bool,
    /// Raw date line -> literal formatted date, for dates the oracle
    /// cannot parse
    #[serde(default)]
    pub whitelist_dates: HashMap<String, String>,
    /// Lines the oracle parses as dates but which are not
    #[serde(default)]
    pub blacklist_dates: Vec<String>,
    /// Entry titles that legitimately have no date line
    #[serde(default)]
    pub known_dateless_entries: Vec<String>,
}

impl JournalConfig {
    /// Load and validate every journal config in a JSON file
    pub fn load_all(path: &Path) -> Result<Vec<Self>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let configs: Vec<Self> =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        for config in &configs {
            config.validate()?;
        }
        Ok(configs)
    }

    /// Check the buffer layout invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize {
                journal: self.input_filename.clone(),
            });
        }
        for index in [self.buffer_title_index, self.buffer_date_index] {
            if index >= self.buffer_size {
                return Err(ConfigError::IndexOutOfRange {
                    journal: self.input_filename.clone(),
                    index,
                    size: self.buffer_size,
                });
            }
        }
        if self.buffer_title_index == self.buffer_date_index {
            return Err(ConfigError::IndexesCollide {
                journal: self.input_filename.clone(),
            });
        }
        Ok(())
    }

    /// Build this journal's empty sliding window
    #[must_use]
    pub fn window(&self) -> SlidingWindow {
        SlidingWindow::new(
            self.buffer_size,
            self.buffer_title_index,
            self.buffer_date_index,
            self.ambiguous_title_date_order,
        )
    }

    /// Build this journal's anomaly registry
    #[must_use]
    pub fn anomalies(&self) -> AnomalyRegistry {
        AnomalyRegistry::new(
            self.whitelist_dates.clone(),
            self.blacklist_dates.iter().cloned(),
            self.known_dateless_entries.iter().cloned(),
        )
    }
}
