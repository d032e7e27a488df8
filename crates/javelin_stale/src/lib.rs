//! Timestamp-based staleness decisions for incremental builds.
//!
//! This crate answers two questions from filesystem mtimes alone: is a set
//! of outputs out of date relative to a set of inputs, and which Java
//! sources need recompiling against an existing class directory. It holds
//! no state across calls; every decision is recomputed from current disk
//! metadata.

#![warn(missing_docs)]

pub mod classes;
pub mod oracle;

pub use classes::{filter_changed, ClassIndex};
pub use oracle::is_stale;
