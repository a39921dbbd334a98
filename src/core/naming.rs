//! Date resolution and filename derivation
//!
//! Turns a confirmed boundary's raw title and date lines into the
//! `(YYYY-MM-DD) Title.txt` filename an entry is written under.

use chrono::Datelike;
use thiserror::Error;

use crate::core::anomalies::AnomalyRegistry;
use crate::core::ports::DateOracle;

/// Characters deleted from titles when deriving filenames
const TITLE_STRIP: &[char] = &[',', '.', '\'', '\u{2019}', '\u{2026}', '?', '!', ':'];

/// Errors that can occur while deriving an entry's name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// The raw date line is in neither the oracle's vocabulary nor the
    /// whitelist; skipping it would corrupt downstream ordering and
    /// counts, so the run stops here
    #[error("date line {0:?} not recognized by the date parser or the whitelist")]
    UnresolvableDate(String),
}

/// Resolve a raw date line to a `YYYY-MM-DD` string
///
/// The oracle is tried first. A parsed year equal to `current_year` but
/// different from `journal_year` means the source text omitted the year
/// and the oracle filled in "now", so the configured journal year is used
/// instead. If the oracle fails, the whitelist's stored literal is
/// trusted as-is, with no year substitution.
pub fn resolve_date(
    raw: &str,
    oracle: &dyn DateOracle,
    anomalies: &AnomalyRegistry,
    journal_year: i32,
    current_year: i32,
) -> Result<String, NamingError> {
    if let Some(parsed) = oracle.try_parse(raw) {
        let year = if parsed.year() == current_year && parsed.year() != journal_year {
            journal_year
        } else {
            parsed.year()
        };
        return Ok(format!("{year:04}-{:02}-{:02}", parsed.month(), parsed.day()));
    }
    anomalies
        .whitelisted(raw.trim())
        .map(ToString::to_string)
        .ok_or_else(|| NamingError::UnresolvableDate(raw.trim().to_string()))
}

/// Clean a raw title for use in a filename
///
/// Trims, then deletes punctuation that has no business in a filename.
/// Pure deletion, so cleaning is idempotent.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    raw.trim().chars().filter(|c| !TITLE_STRIP.contains(c)).collect()
}

/// Compose an entry's filename from its resolved date and raw title
#[must_use]
pub fn entry_filename(date: &str, raw_title: &str) -> String {
    format!("({date}) {}.txt", clean_title(raw_title))
}
