//! Command implementations

mod split;

pub use split::{split, SplitArgs};
