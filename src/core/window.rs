//! Sliding line window
//!
//! A fixed-capacity FIFO over the most recent input lines. The window has
//! two configured offsets, one for the entry title and one for the date
//! line; [`SlidingWindow::is_aligned`] checks whether the current contents
//! have the title/date/blank-lines shape of an entry boundary.

use std::collections::VecDeque;

/// Fixed-capacity FIFO of raw input lines (terminators preserved)
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    capacity: usize,
    title_index: usize,
    date_index: usize,
    ambiguous_order: bool,
    lines: VecDeque<String>,
}

impl SlidingWindow {
    /// Create an empty window
    ///
    /// `title_index` and `date_index` must be distinct and less than
    /// `capacity`; [`crate::config::JournalConfig::validate`] enforces
    /// this before a window is ever built.
    #[must_use]
    pub fn new(
        capacity: usize,
        title_index: usize,
        date_index: usize,
        ambiguous_order: bool,
    ) -> Self {
        Self {
            capacity,
            title_index,
            date_index,
            ambiguous_order,
            lines: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a line; once the window is already at capacity, the oldest
    /// line is evicted and returned so the caller can commit it to the
    /// current output. Returns `None` while the window is still filling.
    pub fn push(&mut self, line: String) -> Option<String> {
        self.lines.push_back(line);
        if self.lines.len() > self.capacity {
            self.lines.pop_front()
        } else {
            None
        }
    }

    /// Empty the window (after a confirmed boundary has been consumed)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Remove and yield all buffered lines, oldest first (end-of-input
    /// flush)
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.lines.drain(..)
    }

    /// Number of buffered lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the window holds no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the window holds exactly `capacity` lines
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.lines.len() == self.capacity
    }

    /// Whether this journal's layout may have title and date transposed
    #[must_use]
    pub fn ambiguous_order(&self) -> bool {
        self.ambiguous_order
    }

    /// The line at the configured title offset, or `None` below capacity
    #[must_use]
    pub fn title_line(&self) -> Option<&str> {
        self.line_at(self.title_index)
    }

    /// The line at the configured date offset, or `None` below capacity
    #[must_use]
    pub fn date_line(&self) -> Option<&str> {
        self.line_at(self.date_index)
    }

    /// Both configured lines as owned strings, or `None` below capacity
    #[must_use]
    pub fn title_and_date(&self) -> Option<(String, String)> {
        Some((self.title_line()?.to_string(), self.date_line()?.to_string()))
    }

    /// The most recently pushed line
    #[must_use]
    pub fn last_line(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Iterate the buffered lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whether the window currently has the shape of an entry boundary:
    /// full, every slot other than the title/date offsets blank
    /// (whitespace-only), and both the title and date slots non-blank.
    ///
    /// Necessary but not sufficient for a boundary; the detector still
    /// has to recognize the date slot as an actual date.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        self.lines.iter().enumerate().all(|(i, line)| {
            let blank = line.trim().is_empty();
            if i == self.title_index || i == self.date_index {
                !blank
            } else {
                blank
            }
        })
    }

    /// Exchange the title and date offsets
    ///
    /// Used once per run to correct an ambiguous-order layout after a
    /// swapped boundary is accepted; never reverts automatically.
    pub fn swap_title_and_date(&mut self) {
        std::mem::swap(&mut self.title_index, &mut self.date_index);
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        if !self.is_full() {
            return None;
        }
        self.lines.get(index).map(String::as_str)
    }
}
