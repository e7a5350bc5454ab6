// src/exec/args.rs

//! Per-context kubectl arguments.

use crate::errors::{ForeachError, Result};

/// The kubectl arguments given after `--`, plus how to point them at one
/// context.
///
/// Without a placeholder each run gets `--context=<name>` prepended. With a
/// placeholder (`-I`), every occurrence of it in every argument is replaced
/// by the context name, like `xargs -I`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgTemplate {
    args: Vec<String>,
    placeholder: Option<String>,
}

impl ArgTemplate {
    /// Build a template. An empty placeholder means none.
    ///
    /// Fails when a placeholder is configured but appears in none of the
    /// arguments, since every run would then target the current context.
    pub fn new(args: Vec<String>, placeholder: Option<String>) -> Result<Self> {
        let placeholder = placeholder.filter(|p| !p.is_empty());
        if let Some(p) = &placeholder {
            if !args.iter().any(|a| a.contains(p.as_str())) {
                return Err(ForeachError::Substitution(format!(
                    "replacement string '{p}' not found in kubectl arguments"
                )));
            }
        }
        Ok(Self { args, placeholder })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Concrete arguments for `context`.
    pub fn materialize(&self, context: &str) -> Result<Vec<String>> {
        let Some(p) = self.placeholder.as_deref() else {
            let mut out = Vec::with_capacity(self.args.len() + 1);
            out.push(format!("--context={context}"));
            out.extend(self.args.iter().cloned());
            return Ok(out);
        };

        let mut replaced = false;
        let out = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(p) {
                    replaced = true;
                    arg.replace(p, context)
                } else {
                    arg.clone()
                }
            })
            .collect();

        if !replaced {
            return Err(ForeachError::Substitution(format!(
                "replacement string '{p}' was not used for context '{context}'"
            )));
        }
        Ok(out)
    }
}
