// src/lib.rs

pub mod cli;
pub mod config;
pub mod contexts;
pub mod errors;
pub mod exec;
pub mod filter;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod session;
pub mod shutdown;
pub mod types;

use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{EnvOverrides, Settings, load_optional};
use crate::contexts::KubectlContexts;
use crate::errors::Result;
use crate::exec::KubectlRunner;
use crate::output::{SynchronizedWriter, dim};
use crate::session::Session;
use crate::shutdown::Shutdown;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and settings resolution
/// - Ctrl-C handling
/// - the kubectl context provider and command runner
/// - the real stdin/stdout/stderr
pub async fn run(args: CliArgs) -> Result<()> {
    let file = load_optional(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &file, EnvOverrides::from_env())?;

    let shutdown = Shutdown::new();
    spawn_interrupt_listener(shutdown.clone(), settings.color.enabled());

    let provider = KubectlContexts::new(settings.kubectl.clone());
    let runner = Arc::new(KubectlRunner::new(settings.kubectl.clone()));

    let session = Session::new(
        settings,
        SynchronizedWriter::new(std::io::stdout()),
        SynchronizedWriter::new(std::io::stderr()),
        shutdown,
    );
    let result = session.run(&provider, runner, tokio::io::stdin()).await;
    debug!(ok = result.is_ok(), "run finished");
    result
}

/// Ctrl-C → shutdown signal.
fn spawn_interrupt_listener(shutdown: Shutdown, colored: bool) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        eprintln!("{}", dim("received exit signal", colored));
        shutdown.trigger();
    });
}
