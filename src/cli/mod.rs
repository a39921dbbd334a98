//! CLI layer for journalsplit
//!
//! - [`app`] - CLI definitions and entry point

pub mod app;

// Re-export main entry point
pub use app::run;
