//! Date recognition port
//!
//! Defines the interface for deciding whether a line of text denotes a
//! calendar date. Recognition quality is the adapter's problem; the core
//! only corrects it through the anomaly registry.

use chrono::NaiveDate;

/// Date recognition abstraction
///
/// Implementations may misfire in either direction on free-form text,
/// which is why the detector filters verdicts through the whitelist and
/// blacklist.
pub trait DateOracle {
    /// Extract a calendar date from a string, or `None` if the string
    /// does not denote one
    fn try_parse(&self, s: &str) -> Option<NaiveDate>;
}
