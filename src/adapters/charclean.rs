//! Character pre-clean pass
//!
//! Some journal exports use U+2028 LINE SEPARATOR where a plain newline
//! belongs, which breaks line-oriented scanning. This pass rewrites the
//! input into a `-charcleaned` sibling before the main scan reads it.

use std::fs;
use std::io;
use std::path::Path;

/// Rewrite U+2028 to `\n`, writing the result to `output`
pub fn clean_file(input: &Path, output: &Path) -> io::Result<()> {
    let text = fs::read_to_string(input)?;
    fs::write(output, text.replace('\u{2028}', "\n"))
}
