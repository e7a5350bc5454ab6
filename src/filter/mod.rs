// src/filter/mod.rs

//! Context filters and the selection engine.
//!
//! A filter is one command-line token:
//!
//! - `name`      exact match
//! - `/regex/`   unanchored regular expression
//! - `^<filter>` exclusion of either of the above
//!
//! [`select`] applies a list of filters to the contexts from kubeconfig.

pub mod parse;
pub mod selector;

use std::fmt;

use regex::Regex;

pub use selector::{Selector, select};

/// A single context filter.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches a context name byte-for-byte.
    Exact(String),
    /// Matches when the expression finds a match anywhere in the name.
    Pattern(Regex),
    /// Vetoes contexts the inner filter matches.
    Excluded(Box<Filter>),
}

impl Filter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Filter::Exact(expected) => name == expected,
            Filter::Pattern(re) => re.is_match(name),
            Filter::Excluded(inner) => inner.matches(name),
        }
    }

    /// Whether this filter adds contexts to the selection (as opposed to
    /// removing them). Depends only on the variant.
    pub fn is_additive(&self) -> bool {
        !matches!(self, Filter::Excluded(_))
    }

    pub fn excluded(inner: Filter) -> Self {
        Filter::Excluded(Box::new(inner))
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Filter::Exact(a), Filter::Exact(b)) => a == b,
            (Filter::Pattern(a), Filter::Pattern(b)) => a.as_str() == b.as_str(),
            (Filter::Excluded(a), Filter::Excluded(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Filter {}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Exact(name) => write!(f, "{name}"),
            Filter::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Filter::Excluded(inner) => write!(f, "^{inner}"),
        }
    }
}
