// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The fan-out executor talks to a [`CommandRunner`] instead of spawning
//! processes itself. Production uses [`KubectlRunner`]; tests provide
//! runners that record invocations or count concurrency without starting
//! any process.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{ForeachError, Result};

/// Borrowed sink a runner writes command output into.
pub type OutputSink<'a> = &'a mut (dyn Write + Send);

/// Trait abstracting how one command is run for one context.
pub trait CommandRunner: Send + Sync + 'static {
    /// Run the command with `args`, writing its stdout and stderr into the
    /// given sinks. An unsuccessful command is an error.
    fn run<'a>(
        &'a self,
        context: &'a str,
        args: Vec<String>,
        stdout: OutputSink<'a>,
        stderr: OutputSink<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Runs `kubectl` as a child process.
#[derive(Debug, Clone)]
pub struct KubectlRunner {
    program: String,
}

impl KubectlRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for KubectlRunner {
    fn default() -> Self {
        Self::new("kubectl")
    }
}

impl CommandRunner for KubectlRunner {
    fn run<'a>(
        &'a self,
        context: &'a str,
        args: Vec<String>,
        stdout: OutputSink<'a>,
        stderr: OutputSink<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            debug!(context = %context, program = %self.program, ?args, "starting kubectl");

            let mut child = Command::new(&self.program)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .with_context(|| format!("spawning '{}' for context '{}'", self.program, context))?;

            let child_out = child.stdout.take().context("child stdout was not piped")?;
            let child_err = child.stderr.take().context("child stderr was not piped")?;

            // Both pipes must be drained together or the child can block on
            // a full buffer.
            let (out_res, err_res, status) = tokio::join!(
                pump(child_out, stdout),
                pump(child_err, stderr),
                child.wait(),
            );
            out_res?;
            err_res?;

            let status = status
                .with_context(|| format!("waiting for kubectl of context '{context}'"))?;

            info!(
                context = %context,
                exit_code = status.code().unwrap_or(-1),
                success = status.success(),
                "kubectl exited"
            );

            if status.success() {
                Ok(())
            } else {
                Err(ForeachError::Execution {
                    status: status.to_string(),
                })
            }
        })
    }
}

/// Copy `src` into `dst` chunk by chunk until EOF.
async fn pump<R>(mut src: R, dst: OutputSink<'_>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; 8 * 1024];
    loop {
        let n = src.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        dst.write_all(&buf[..n])?;
    }
}
