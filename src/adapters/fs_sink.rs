//! Directory-backed entry sink
//!
//! Writes one file per entry into the journal's output directory. The
//! preamble (everything before the first boundary) lands in `header.txt`.
//! Directory creation is idempotent and colliding filenames are silently
//! overwritten; reruns are the recovery path for a misconfigured buffer.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::core::ports::EntrySink;

/// Separator line between an entry's header and its body
const HEADER_SEPARATOR: &str = "++++++++++++++++++++++++++++++++++++";

/// Entry sink writing into a single output directory
#[derive(Debug)]
pub struct DirEntrySink {
    dir: PathBuf,
    current: Option<BufWriter<File>>,
}

impl DirEntrySink {
    /// Create the output directory (if needed) and open `header.txt` as
    /// the initial output
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let header = File::create(dir.join("header.txt"))?;
        Ok(Self {
            dir,
            current: Some(BufWriter::new(header)),
        })
    }

    fn close_current(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.current.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl EntrySink for DirEntrySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.current.as_mut() {
            Some(writer) => writer.write_all(line.as_bytes()),
            None => Err(io::Error::other("entry sink already finished")),
        }
    }

    fn start_entry(&mut self, filename: &str, title: &str, date: &str) -> io::Result<()> {
        self.close_current()?;
        let file = File::create(self.dir.join(filename))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "Title: {title}\nDate: {date}\n{HEADER_SEPARATOR}\n\n")?;
        self.current = Some(writer);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.close_current()
    }
}
