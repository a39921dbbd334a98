//! journalsplit - split concatenated plaintext journals into one file per
//! entry

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

use std::process::ExitCode;

/// Main entry point for the journalsplit CLI
fn main() -> ExitCode {
    match journalsplit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        },
    }
}
