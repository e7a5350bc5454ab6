// src/contexts.rs

//! Where the candidate contexts come from.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{ForeachError, Result};

/// Supplies the ordered list of candidate contexts, once per run.
pub trait ContextProvider: Send + Sync {
    fn contexts(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>>;
}

/// Reads context names from `kubectl config get-contexts -o=name`.
#[derive(Debug, Clone)]
pub struct KubectlContexts {
    program: String,
}

impl KubectlContexts {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ContextProvider for KubectlContexts {
    fn contexts(&self) -> Pin<Box<dyn Future<Output = Result<Vec<String>>> + Send + '_>> {
        Box::pin(async move {
            let output = Command::new(&self.program)
                .args(["config", "get-contexts", "-o=name"])
                .stdin(Stdio::null())
                .stderr(Stdio::inherit())
                .output()
                .await
                .map_err(|e| ForeachError::Provider(format!("running {}: {e}", self.program)))?;

            if !output.status.success() {
                return Err(ForeachError::Provider(format!(
                    "{} config get-contexts exited with {}",
                    self.program, output.status
                )));
            }

            let contexts = parse_context_names(&String::from_utf8_lossy(&output.stdout));
            debug!(count = contexts.len(), "loaded contexts from kubeconfig");
            Ok(contexts)
        })
    }
}

/// One context per line; surrounding whitespace and blank lines are dropped.
pub fn parse_context_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
