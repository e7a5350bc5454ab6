// src/output/prefix.rs

use std::io::{self, Write};

/// Writes every line it receives to `inner` with `prefix` in front.
///
/// Input may arrive in arbitrary chunks. A partial line is held back until
/// its newline arrives (or [`PrefixWriter::finish`] is called), and each
/// complete line is handed to `inner` in a single `write_all`. Over a
/// [`SynchronizedWriter`](super::SynchronizedWriter) this keeps lines from
/// different tasks from merging.
#[derive(Debug)]
pub struct PrefixWriter<W> {
    prefix: Vec<u8>,
    inner: W,
    pending: Vec<u8>,
}

impl<W: Write> PrefixWriter<W> {
    pub fn new(prefix: impl Into<Vec<u8>>, inner: W) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
            pending: Vec::new(),
        }
    }

    /// Flush a held-back partial line, terminating it with a newline.
    ///
    /// Calling this with nothing pending is a no-op.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        // command ended without a trailing newline; add one so the
        // prefixed stream stays well-formed
        if self.pending.last() != Some(&b'\n') {
            self.pending.push(b'\n');
        }
        self.inner.write_all(&self.pending)?;
        self.pending.clear();
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for PrefixWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while !rest.is_empty() {
            if self.pending.is_empty() {
                self.pending.extend_from_slice(&self.prefix);
            }

            match rest.iter().position(|&b| b == b'\n') {
                None => {
                    self.pending.extend_from_slice(rest);
                    break;
                }
                Some(i) => {
                    self.pending.extend_from_slice(&rest[..=i]);
                    self.inner.write_all(&self.pending)?;
                    self.pending.clear();
                    rest = &rest[i + 1..];
                }
            }
        }
        Ok(buf.len())
    }

    /// Flushes `inner` only; a partial line stays pending.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
