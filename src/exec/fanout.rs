// src/exec/fanout.rs

//! Bounded parallel execution over the selected contexts.

use std::io::Write;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::errors::{ForeachError, Result};
use crate::output::{PrefixWriter, SynchronizedWriter, label_width, task_label};
use crate::shutdown::Shutdown;

use super::backend::CommandRunner;

/// Options for a fan-out run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanOutOptions {
    /// Maximum number of concurrent runs; 0 means one per context.
    pub workers: usize,
    /// Colour the per-line context labels.
    pub colored: bool,
}

/// Number of tasks allowed in flight at once.
pub fn effective_parallelism(workers: usize, targets: usize) -> usize {
    if workers > 0 {
        workers.min(targets)
    } else {
        targets
    }
}

/// Runs one command per context, at most `workers` at a time.
///
/// Every task writes through its own [`PrefixWriter`]s into the shared
/// stdout/stderr writers. Contexts are submitted in order; they may finish
/// in any order.
///
/// A failing task does not stop its siblings or later submissions; the
/// first error observed becomes the run's error. Once `shutdown` fires, no
/// further contexts are started, but tasks already running are left to
/// finish on their own (they are never killed from here).
pub struct FanOut {
    runner: Arc<dyn CommandRunner>,
    options: FanOutOptions,
    shutdown: Shutdown,
}

impl FanOut {
    pub fn new(runner: Arc<dyn CommandRunner>, options: FanOutOptions, shutdown: Shutdown) -> Self {
        Self {
            runner,
            options,
            shutdown,
        }
    }

    pub async fn run_all<F, W, E>(
        &self,
        contexts: &[String],
        args_for: F,
        stdout: &SynchronizedWriter<W>,
        stderr: &SynchronizedWriter<E>,
    ) -> Result<()>
    where
        F: Fn(&str) -> Result<Vec<String>> + Send + Sync + 'static,
        W: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        if contexts.is_empty() {
            return Ok(());
        }

        let limit = effective_parallelism(self.options.workers, contexts.len());
        let width = label_width(contexts);
        let semaphore = Arc::new(Semaphore::new(limit));
        let args_for = Arc::new(args_for);
        let mut tasks = JoinSet::new();

        info!(contexts = contexts.len(), workers = limit, "starting fan-out");

        let mut started = 0usize;
        for (index, context) in contexts.iter().enumerate() {
            let permit = tokio::select! {
                biased;
                _ = self.shutdown.triggered() => None,
                permit = Arc::clone(&semaphore).acquire_owned() => permit.ok(),
            };
            let Some(permit) = permit else {
                warn!(
                    skipped = contexts.len() - started,
                    "not starting remaining contexts after shutdown"
                );
                break;
            };

            let label = task_label(context, index, width, self.options.colored);
            let task = ContextTask {
                context: context.clone(),
                out: PrefixWriter::new(label.clone(), stdout.clone()),
                err: PrefixWriter::new(label, stderr.clone()),
            };
            let runner = Arc::clone(&self.runner);
            let args_for = Arc::clone(&args_for);

            tasks.spawn(async move {
                let _permit = permit;
                let context = task.context.clone();
                task.run(runner.as_ref(), args_for.as_ref())
                    .await
                    .map_err(|e| e.for_target(&context))
            });
            started += 1;
        }

        let mut first_err: Option<ForeachError> = None;
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined.unwrap_or_else(|e| {
                Err(ForeachError::Other(anyhow::anyhow!("task panicked: {e}")))
            });
            if let Err(err) = outcome {
                match first_err {
                    None => first_err = Some(err),
                    Some(_) => debug!(error = %err, "additional task failure"),
                }
            }
        }

        if let Some(err) = first_err {
            return Err(err);
        }
        if started < contexts.len() {
            return Err(ForeachError::Interrupted {
                skipped: contexts.len() - started,
            });
        }
        Ok(())
    }
}

/// One context's unit of work and its private prefixing writers.
struct ContextTask<W, E> {
    context: String,
    out: PrefixWriter<SynchronizedWriter<W>>,
    err: PrefixWriter<SynchronizedWriter<E>>,
}

impl<W, E> ContextTask<W, E>
where
    W: Write + Send + 'static,
    E: Write + Send + 'static,
{
    async fn run<F>(mut self, runner: &dyn CommandRunner, args_for: F) -> Result<()>
    where
        F: Fn(&str) -> Result<Vec<String>>,
    {
        debug!(context = %self.context, "task started");

        let result = match args_for(&self.context) {
            Ok(args) => {
                runner
                    .run(&self.context, args, &mut self.out, &mut self.err)
                    .await
            }
            Err(e) => Err(e),
        };

        // Always flush partial trailing lines, even when the command failed.
        let flushed = self.out.finish().and(self.err.finish());

        debug!(context = %self.context, ok = result.is_ok(), "task finished");
        result.and(flushed.map_err(ForeachError::from))
    }
}
