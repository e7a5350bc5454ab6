// src/prompt.rs

//! Cancelable `[Y/n]` confirmation.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::oneshot;
use tracing::debug;

use crate::errors::{ForeachError, Result};
use crate::shutdown::Shutdown;

/// Wait for the user to confirm on `input`.
///
/// The first line decides: `y`, `Y` or an empty line accept, anything else
/// (including end of input) refuses. The read happens on a spawned task so
/// that `shutdown` can win the race; when it does, the task is aborted and
/// `input` is dropped with it.
pub async fn confirm<R>(input: R, shutdown: &Shutdown) -> Result<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (line_tx, line_rx) = oneshot::channel();

    let scanner = tokio::spawn(async move {
        let mut lines = BufReader::new(input).lines();
        let _ = line_tx.send(lines.next_line().await);
    });

    tokio::select! {
        biased;

        _ = shutdown.triggered() => {
            scanner.abort();
            debug!("confirmation prompt interrupted");
            Err(ForeachError::Canceled)
        }

        scanned = line_rx => match scanned {
            Ok(Ok(Some(line))) if is_affirmative(&line) => Ok(()),
            Ok(Ok(_)) => Err(ForeachError::UserRejected),
            Ok(Err(e)) => Err(ForeachError::IoError(e)),
            // scanner went away without answering
            Err(_) => Err(ForeachError::Canceled),
        },
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer, "y" | "Y" | "")
}
