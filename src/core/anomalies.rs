//! Anomaly overrides for the date oracle
//!
//! Real journals accumulate lines the oracle gets wrong in both
//! directions. The registry holds three per-journal lookup sets that
//! override its verdicts: a whitelist of unparseable-but-known dates, a
//! blacklist of false positives, and the titles of entries that carry no
//! date line at all.

use std::collections::{HashMap, HashSet};

/// Per-journal overrides for date recognition, immutable for the run
#[derive(Debug, Clone, Default)]
pub struct AnomalyRegistry {
    whitelist: HashMap<String, String>,
    blacklist: HashSet<String>,
    dateless: HashSet<String>,
}

impl AnomalyRegistry {
    /// Build a registry from the configured overrides
    #[must_use]
    pub fn new(
        whitelist: impl IntoIterator<Item = (String, String)>,
        blacklist: impl IntoIterator<Item = String>,
        dateless: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            whitelist: whitelist.into_iter().collect(),
            blacklist: blacklist.into_iter().collect(),
            dateless: dateless.into_iter().collect(),
        }
    }

    /// Whether a trimmed line is a known oracle false positive
    #[must_use]
    pub fn is_blacklisted(&self, trimmed: &str) -> bool {
        self.blacklist.contains(trimmed)
    }

    /// The stored literal date for a trimmed line the oracle cannot parse
    #[must_use]
    pub fn whitelisted(&self, trimmed: &str) -> Option<&str> {
        self.whitelist.get(trimmed).map(String::as_str)
    }

    /// The registered dateless title matching a trimmed line, if any
    #[must_use]
    pub fn dateless_title(&self, trimmed: &str) -> Option<&str> {
        self.dateless.get(trimmed).map(String::as_str)
    }
}
