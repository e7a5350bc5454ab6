// src/session.rs

//! One end-to-end run: contexts → selection → confirmation → fan-out.

use std::io::Write;
use std::sync::Arc;

use tokio::io::AsyncRead;
use tracing::{debug, info};

use crate::config::Settings;
use crate::contexts::ContextProvider;
use crate::errors::{ForeachError, Result};
use crate::exec::{CommandRunner, FanOut, FanOutOptions};
use crate::filter::select;
use crate::output::{SynchronizedWriter, dim};
use crate::prompt::confirm;
use crate::shutdown::Shutdown;

/// Everything a run needs besides its collaborators.
///
/// `stdout` and `stderr` are the only handles on the real streams; the
/// banner, the prompt and all task output go through them.
pub struct Session<W, E> {
    pub settings: Settings,
    pub stdout: SynchronizedWriter<W>,
    pub stderr: SynchronizedWriter<E>,
    pub shutdown: Shutdown,
}

impl<W, E> Session<W, E>
where
    W: Write + Send + 'static,
    E: Write + Send + 'static,
{
    pub fn new(
        settings: Settings,
        stdout: SynchronizedWriter<W>,
        stderr: SynchronizedWriter<E>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            settings,
            stdout,
            stderr,
            shutdown,
        }
    }

    /// Run the configured command in every selected context.
    ///
    /// `input` is only read when a confirmation is required.
    pub async fn run<P, I>(
        &self,
        provider: &P,
        runner: Arc<dyn CommandRunner>,
        input: I,
    ) -> Result<()>
    where
        P: ContextProvider + ?Sized,
        I: AsyncRead + Unpin + Send + 'static,
    {
        let candidates = provider.contexts().await?;
        let selected = select(&candidates, &self.settings.filters);
        debug!(
            candidates = candidates.len(),
            selected = selected.len(),
            "applied context filters"
        );

        if selected.is_empty() {
            return Err(ForeachError::EmptySelection);
        }

        let colored = self.settings.color.enabled();
        if self.settings.skip_prompt {
            debug!("confirmation disabled");
        } else if self.settings.auto {
            self.print_banner(
                "Running command in context(s) automatically:",
                &selected,
                colored,
                false,
            )?;
        } else {
            self.print_banner("Will run command in context(s):", &selected, colored, true)?;
            confirm(input, &self.shutdown).await?;
        }

        info!(contexts = ?selected, "running command");

        let template = self.settings.template.clone();
        let fan_out = FanOut::new(
            runner,
            FanOutOptions {
                workers: self.settings.workers,
                colored,
            },
            self.shutdown.clone(),
        );
        fan_out
            .run_all(
                &selected,
                move |context| template.materialize(context),
                &self.stdout,
                &self.stderr,
            )
            .await
    }

    fn print_banner(
        &self,
        heading: &str,
        selected: &[String],
        colored: bool,
        ask: bool,
    ) -> Result<()> {
        let mut banner = format!("{heading}\n");
        for context in selected {
            banner.push_str(&dim(&format!("  - {context}"), colored));
            banner.push('\n');
        }
        if ask {
            banner.push_str("Continue? [Y/n]: ");
        }

        let mut stderr = self.stderr.clone();
        stderr.write_all(banner.as_bytes())?;
        stderr.flush()?;
        Ok(())
    }
}
