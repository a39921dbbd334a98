//! Adapters implementing the core's port traits
//!
//! - [`chrono_oracle`] - date recognition built on chrono's format parsing
//! - [`fs_sink`] - directory-backed entry output
//! - [`charclean`] - the optional U+2028 pre-clean pass

pub mod charclean;
pub mod chrono_oracle;
pub mod fs_sink;

pub use chrono_oracle::ChronoDateOracle;
pub use fs_sink::DirEntrySink;
