//! Entry boundary detection
//!
//! Combines the window shape check, the date oracle, and the anomaly
//! overrides into a single verdict. The detector is a pure predicate: it
//! reports that a swapped boundary *would* apply, and the splitter applies
//! the actual [`SlidingWindow::swap_title_and_date`] transition once it
//! accepts the boundary. Keeping the mutation out of the query keeps each
//! run independently testable.

use crate::core::anomalies::AnomalyRegistry;
use crate::core::ports::DateOracle;
use crate::core::window::SlidingWindow;

/// Verdict for one window state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryCheck {
    /// The window is not sitting at an entry boundary
    NotABoundary,
    /// A new entry starts here
    Boundary {
        /// The date was found at the title offset; the caller must swap
        /// the window's offsets before extracting title and date
        swapped: bool,
    },
}

/// Decides whether the window currently sits at an entry boundary
pub struct EntryBoundaryDetector<'a> {
    oracle: &'a dyn DateOracle,
    anomalies: &'a AnomalyRegistry,
}

impl std::fmt::Debug for EntryBoundaryDetector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryBoundaryDetector")
            .field("anomalies", &self.anomalies)
            .finish_non_exhaustive()
    }
}

impl<'a> EntryBoundaryDetector<'a> {
    /// Create a detector over the given oracle and overrides
    #[must_use]
    pub fn new(oracle: &'a dyn DateOracle, anomalies: &'a AnomalyRegistry) -> Self {
        Self { oracle, anomalies }
    }

    /// Check the window for a structural boundary
    ///
    /// The shape check comes first so the oracle is only consulted for
    /// windows that could possibly be boundaries.
    #[must_use]
    pub fn check(&self, window: &SlidingWindow) -> BoundaryCheck {
        if !window.is_aligned() {
            return BoundaryCheck::NotABoundary;
        }
        let Some((title_line, date_line)) = window.title_and_date() else {
            return BoundaryCheck::NotABoundary;
        };
        if self.is_recognized_date(&date_line) {
            return BoundaryCheck::Boundary { swapped: false };
        }
        if window.ambiguous_order() && self.is_recognized_date(&title_line) {
            return BoundaryCheck::Boundary { swapped: true };
        }
        BoundaryCheck::NotABoundary
    }

    /// Whether a line denotes a date, after anomaly overrides
    ///
    /// The oracle's yes is vetoed by the blacklist; its no is overridden
    /// by a whitelist hit.
    #[must_use]
    pub fn is_recognized_date(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if self.oracle.try_parse(line).is_some() && !self.anomalies.is_blacklisted(trimmed) {
            return true;
        }
        self.anomalies.whitelisted(trimmed).is_some()
    }

    /// Match the window against the registered dateless entries
    ///
    /// Exactly one buffered line may have more than one character of
    /// content, and the freshest line must be exactly a blank `"\n"`; if
    /// that one line, trimmed, names a registered dateless title, the
    /// window is treated as a boundary with no date of its own.
    #[must_use]
    pub fn match_dateless(&self, window: &SlidingWindow) -> Option<&'a str> {
        if window.last_line()? != "\n" {
            return None;
        }
        let mut nonblank = window.lines().filter(|l| l.trim().len() > 1);
        let candidate = nonblank.next()?;
        if nonblank.next().is_some() {
            return None;
        }
        self.anomalies.dateless_title(candidate.trim())
    }
}
