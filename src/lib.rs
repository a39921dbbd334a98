//! journalsplit - split concatenated plaintext journals into one file per
//! entry
//!
//! This library provides the sliding-window boundary detector that decides
//! where one diary entry ends and the next begins, plus the surrounding
//! configuration, anomaly-override, and output plumbing.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod output;
