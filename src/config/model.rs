// src/config/model.rs

use serde::Deserialize;

use crate::types::ColorMode;

/// Optional defaults read from a TOML file.
///
/// ```toml
/// workers = 4
/// kubectl = "/usr/local/bin/kubectl"
/// replace = "{}"
/// disable_prompts = false
/// color = "auto"
/// ```
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFileConfig {
    /// Parallel runs; 0 means one per matched context.
    pub workers: Option<usize>,

    /// kubectl executable to run.
    pub kubectl: Option<String>,

    /// Default `-I` replacement string.
    pub replace: Option<String>,

    /// Skip the confirmation prompt.
    pub disable_prompts: Option<bool>,

    pub color: Option<ColorMode>,
}

/// A [`RawFileConfig`] that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    raw: RawFileConfig,
}

impl FileConfig {
    pub(crate) fn new_unchecked(raw: RawFileConfig) -> Self {
        Self { raw }
    }

    pub fn workers(&self) -> Option<usize> {
        self.raw.workers
    }

    pub fn kubectl(&self) -> Option<&str> {
        self.raw.kubectl.as_deref()
    }

    pub fn replace(&self) -> Option<&str> {
        self.raw.replace.as_deref()
    }

    pub fn disable_prompts(&self) -> Option<bool> {
        self.raw.disable_prompts
    }

    pub fn color(&self) -> Option<ColorMode> {
        self.raw.color
    }
}
