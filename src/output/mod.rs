// src/output/mod.rs

//! Output multiplexing for concurrent kubectl runs.
//!
//! - [`sync`] provides [`SynchronizedWriter`], the single shared handle on
//!   stdout (and one on stderr).
//! - [`prefix`] provides [`PrefixWriter`], one per task and stream, which
//!   labels each line and only ever hands complete lines to the shared
//!   writer.
//! - [`palette`] builds the coloured task labels.

pub mod palette;
pub mod prefix;
pub mod sync;

pub use palette::{dim, error_marker, label_width, task_label};
pub use prefix::PrefixWriter;
pub use sync::SynchronizedWriter;
