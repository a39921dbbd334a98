//! Date oracle built on chrono
//!
//! Tries a battery of date formats seen in real journals. Year-less
//! forms ("March 3") are resolved against an assumed year, which defaults
//! to the current local year; the year-substitution rule in
//! [`crate::core::naming`] then maps that back to the journal's own year.
//! Lines the battery cannot handle are the whitelist's job.

use chrono::{Datelike, Local, NaiveDate};

use crate::core::ports::DateOracle;

/// Formats carrying an explicit year
///
/// chrono accepts both full and abbreviated month names for `%B`, and
/// unpadded day numbers for `%d`.
const DATED_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d. %B %Y",
    "%m/%d/%Y",
];

/// Year-less formats, completed with the assumed year before parsing
const YEARLESS_FORMATS: &[&str] = &["%B %d", "%d %B"];

/// Date recognition via a chrono format battery
#[derive(Debug, Clone, Copy)]
pub struct ChronoDateOracle {
    assumed_year: i32,
}

impl ChronoDateOracle {
    /// Oracle assuming the current local year for year-less dates
    #[must_use]
    pub fn new() -> Self {
        Self {
            assumed_year: Local::now().year(),
        }
    }

    /// Oracle assuming a fixed year for year-less dates (tests)
    #[must_use]
    pub fn with_assumed_year(assumed_year: i32) -> Self {
        Self { assumed_year }
    }
}

impl Default for ChronoDateOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DateOracle for ChronoDateOracle {
    fn try_parse(&self, s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        for format in DATED_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Some(date);
            }
        }
        for format in YEARLESS_FORMATS {
            let completed = format!("{s} {}", self.assumed_year);
            let with_year = format!("{format} %Y");
            if let Ok(date) = NaiveDate::parse_from_str(&completed, &with_year) {
                return Some(date);
            }
        }
        None
    }
}
