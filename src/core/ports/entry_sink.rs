//! Entry output port
//!
//! The splitter never touches the filesystem directly; it streams lines
//! and entry rotations through this interface. The directory-backed
//! implementation lives in [`crate::adapters::fs_sink`].

use std::io;

/// Destination for split entries
///
/// A sink always has exactly one output open: initially the preamble
/// (everything before the first boundary), then whichever entry was
/// started last.
pub trait EntrySink {
    /// Append a raw line (terminator included) to the open output
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Close the open output and begin a new entry file with the given
    /// filename and two-line header
    fn start_entry(&mut self, filename: &str, title: &str, date: &str) -> io::Result<()>;

    /// Flush and close whatever output is open
    fn finish(&mut self) -> io::Result<()>;
}

/// Sink that drops everything, for dry runs
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl EntrySink for DiscardSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn start_entry(&mut self, _filename: &str, _title: &str, _date: &str) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
