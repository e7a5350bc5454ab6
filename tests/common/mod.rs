#![allow(dead_code)]

use std::error::Error;

#[allow(unused_imports)]
pub use kubectl_foreach_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn Error>>;

/// Owned context names from string literals.
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
