// src/exec/mod.rs

//! Command execution layer.
//!
//! - [`args`] turns the kubectl arguments after `--` into per-context
//!   argument lists.
//! - [`backend`] provides the `CommandRunner` trait and the `KubectlRunner`
//!   used in production, which tests replace with fakes.
//! - [`fanout`] runs one command per selected context under a worker limit
//!   and multiplexes their output.

pub mod args;
pub mod backend;
pub mod fanout;

pub use args::ArgTemplate;
pub use backend::{CommandRunner, KubectlRunner, OutputSink};
pub use fanout::{FanOut, FanOutOptions, effective_parallelism};
