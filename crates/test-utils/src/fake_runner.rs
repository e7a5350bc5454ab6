use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;

use kubectl_foreach::errors::{ForeachError, Result};
use kubectl_foreach::exec::{CommandRunner, OutputSink};

type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub context: String,
    pub args: Vec<String>,
}

/// A fake runner that:
/// - records every invocation
/// - writes `out <context>` to stdout and an unterminated `warn <context>`
///   to stderr, in small chunks
/// - fails for the contexts listed in `failing`.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    failing: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, context: &str) -> Self {
        self.failing.insert(context.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn contexts_run(&self) -> Vec<String> {
        self.invocations().into_iter().map(|i| i.context).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run<'a>(
        &'a self,
        context: &'a str,
        args: Vec<String>,
        stdout: OutputSink<'a>,
        stderr: OutputSink<'a>,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            self.invocations.lock().unwrap().push(Invocation {
                context: context.to_string(),
                args,
            });

            stdout.write_all(b"out ")?;
            tokio::task::yield_now().await;
            stdout.write_all(format!("{context}\n").as_bytes())?;
            stderr.write_all(format!("warn {context}").as_bytes())?;

            if self.failing.contains(context) {
                return Err(ForeachError::Execution {
                    status: "exit status: 1".to_string(),
                });
            }
            Ok(())
        })
    }
}

/// Counts how many runs are in flight at once.
#[derive(Debug, Clone)]
pub struct ConcurrencyProbe {
    current: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    hold: Duration,
}

impl ConcurrencyProbe {
    pub fn new(hold: Duration) -> Self {
        Self {
            current: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(0)),
            hold,
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl CommandRunner for ConcurrencyProbe {
    fn run<'a>(
        &'a self,
        _context: &'a str,
        _args: Vec<String>,
        _stdout: OutputSink<'a>,
        _stderr: OutputSink<'a>,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.hold).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            self.total.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

/// Blocks every run until the test releases it.
#[derive(Debug, Clone)]
pub struct GatedRunner {
    gate: Arc<Semaphore>,
    started: Arc<Mutex<Vec<String>>>,
}

impl GatedRunner {
    pub fn new() -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
            started: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Let `n` blocked (or future) runs finish.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    /// Poll until `n` runs have started.
    pub async fn wait_for_started(&self, n: usize) {
        for _ in 0..500 {
            if self.started.lock().unwrap().len() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {n} runs to start");
    }
}

impl Default for GatedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for GatedRunner {
    fn run<'a>(
        &'a self,
        context: &'a str,
        _args: Vec<String>,
        _stdout: OutputSink<'a>,
        _stderr: OutputSink<'a>,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            self.started.lock().unwrap().push(context.to_string());
            let permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| ForeachError::Other(anyhow::anyhow!(e)))?;
            permit.forget();
            Ok(())
        })
    }
}
