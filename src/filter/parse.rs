// src/filter/parse.rs

//! Command-line syntax for filters.

use std::str::FromStr;

use regex::Regex;

use crate::errors::{ForeachError, Result};

use super::Filter;

impl Filter {
    /// Parse one filter token.
    ///
    /// A leading `^` turns the rest of the token into an exclusion. The rest
    /// is a pattern only when it is wrapped in slashes (`/re/`); anything
    /// else, including `/re` and a lone `/`, is an exact name.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(ForeachError::Parse(
                "empty string cannot be used as a filter".to_string(),
            ));
        }

        let (exclusion, spec) = match token.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        let filter = if spec.len() > 1 && spec.starts_with('/') && spec.ends_with('/') {
            let expr = &spec[1..spec.len() - 1];
            let re = Regex::new(expr).map_err(|error| ForeachError::InvalidPattern {
                pattern: spec.to_string(),
                error,
            })?;
            Filter::Pattern(re)
        } else {
            Filter::Exact(spec.to_string())
        };

        if exclusion {
            Ok(Filter::excluded(filter))
        } else {
            Ok(filter)
        }
    }
}

impl FromStr for Filter {
    type Err = ForeachError;

    fn from_str(s: &str) -> Result<Self> {
        Filter::parse(s)
    }
}

/// Parse every token, stopping at the first invalid one.
pub fn parse_filters<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Filter>> {
    tokens.iter().map(|t| Filter::parse(t.as_ref())).collect()
}
