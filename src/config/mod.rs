// src/config/mod.rs

//! Configuration for a kubectl-foreach run.
//!
//! Responsibilities:
//! - Define the optional TOML file model (`model.rs`).
//! - Load it from disk (`loader.rs`) and validate it (`validate.rs`).
//! - Merge CLI flags, environment and file into [`Settings`], parsing the
//!   filters and the kubectl argument template on the way so that every
//!   user error surfaces before any context is touched.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_optional};
pub use model::{FileConfig, RawFileConfig};

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::exec::ArgTemplate;
use crate::filter::Filter;
use crate::filter::parse::parse_filters;
use crate::types::ColorMode;

/// Any non-empty value disables the confirmation prompt.
pub const DISABLE_PROMPTS_ENV: &str = "ALLCTX_DISABLE_PROMPTS";

pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Settings taken from the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub disable_prompts: bool,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            disable_prompts: std::env::var(DISABLE_PROMPTS_ENV).is_ok_and(|v| !v.is_empty()),
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub filters: Vec<Filter>,
    pub template: ArgTemplate,
    /// 0 means one worker per matched context.
    pub workers: usize,
    pub kubectl: String,
    /// No banner and no prompt.
    pub skip_prompt: bool,
    /// Print the banner but do not prompt.
    pub auto: bool,
    pub color: ColorMode,
}

impl Settings {
    /// Merge the layers: CLI flags, then environment, then file, then
    /// built-in defaults.
    pub fn resolve(args: &CliArgs, file: &FileConfig, env: EnvOverrides) -> Result<Self> {
        let filters = parse_filters(&args.filters)?;

        let placeholder = args
            .replace
            .clone()
            .or_else(|| file.replace().map(str::to_string));
        let template = ArgTemplate::new(args.command.clone(), placeholder)?;

        let settings = Self {
            filters,
            template,
            workers: args.workers.or(file.workers()).unwrap_or(0),
            kubectl: file.kubectl().unwrap_or(DEFAULT_KUBECTL).to_string(),
            skip_prompt: args.quiet
                || env.disable_prompts
                || file.disable_prompts().unwrap_or(false),
            auto: args.auto,
            color: args.color.or(file.color()).unwrap_or_default(),
        };

        debug!(
            filters = settings.filters.len(),
            workers = settings.workers,
            kubectl = %settings.kubectl,
            skip_prompt = settings.skip_prompt,
            auto = settings.auto,
            "resolved settings"
        );
        Ok(settings)
    }
}
