//! Core domain logic for journalsplit
//!
//! This module contains the boundary-detection logic with no I/O
//! dependencies. All external interactions are abstracted through port
//! traits.
//!
//! ## Architecture
//!
//! - [`window`] - fixed-capacity FIFO of the most recent input lines
//! - [`anomalies`] - whitelist/blacklist/dateless overrides for the oracle
//! - [`detector`] - the boundary predicate
//! - [`naming`] - date resolution and filename derivation
//! - [`splitter`] - the scan loop that drives everything
//! - [`ports`] - trait definitions for external dependencies

pub mod anomalies;
pub mod detector;
pub mod naming;
pub mod ports;
pub mod splitter;
pub mod window;
