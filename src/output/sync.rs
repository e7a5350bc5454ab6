// src/output/sync.rs

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable handle that serializes writes onto one underlying stream.
///
/// Each `write` call holds the lock for the whole underlying `write_all`,
/// so bytes from two concurrent calls never interleave. Which call lands
/// first is up to the scheduler.
#[derive(Debug)]
pub struct SynchronizedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SynchronizedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Recover the underlying stream once every other handle is gone.
    pub fn into_inner(self) -> Option<W> {
        Arc::try_unwrap(self.inner)
            .ok()
            .and_then(|m| m.into_inner().ok())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, W>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::other("output stream lock poisoned"))
    }
}

impl<W> Clone for SynchronizedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SynchronizedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.lock()?;
        guard.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}
