// src/config/validate.rs

use crate::config::model::{FileConfig, RawFileConfig};
use crate::errors::{ForeachError, Result};

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = ForeachError;

    fn try_from(raw: RawFileConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(FileConfig::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawFileConfig) -> Result<()> {
    validate_kubectl(cfg)?;
    Ok(())
}

fn validate_kubectl(cfg: &RawFileConfig) -> Result<()> {
    if let Some(program) = &cfg.kubectl {
        if program.trim().is_empty() {
            return Err(ForeachError::ConfigError(
                "`kubectl` must name an executable (got an empty string)".to_string(),
            ));
        }
    }
    Ok(())
}
