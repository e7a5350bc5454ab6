// src/types.rs

use clap::ValueEnum;
use serde::Deserialize;

/// When to colour context labels and informational output.
///
/// - `Auto`: colour when stderr is a terminal (respecting `NO_COLOR` /
///   `CLICOLOR_FORCE`).
/// - `Always` / `Never`: force it on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled_stderr(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
