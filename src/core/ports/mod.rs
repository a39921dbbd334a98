//! Port trait definitions
//!
//! External capabilities the core depends on, abstracted so tests can
//! substitute deterministic fakes:
//!
//! - [`date_oracle`] - natural-language date recognition
//! - [`entry_sink`] - where completed entry files are written

pub mod date_oracle;
pub mod entry_sink;

pub use date_oracle::DateOracle;
pub use entry_sink::{DiscardSink, EntrySink};
