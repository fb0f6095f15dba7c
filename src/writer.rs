use crate::context::Context;
use crate::error::LogError;
use crate::level::Severity;
use crate::sink::LogSink;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// [`LogSink`] over any byte stream.
///
/// Writes are serialized by an internal lock and each record goes out with
/// a single `write_all` followed by `flush`, so records never interleave
/// and nothing sits in a buffer after the call returns. Records below
/// `min_level` are dropped here rather than in the facade.
pub struct WriterSink {
    out: Mutex<Box<dyn Write + Send>>,
    min_level: Severity,
}

impl WriterSink {
    pub fn new(out: Box<dyn Write + Send>, min_level: Severity) -> Self {
        WriterSink { out: Mutex::new(out), min_level }
    }

    /// Sink over the process's standard output.
    pub fn stdout(min_level: Severity) -> Self {
        Self::new(Box::new(io::stdout()), min_level)
    }

    /// Sink over the process's standard error.
    pub fn stderr(min_level: Severity) -> Self {
        Self::new(Box::new(io::stderr()), min_level)
    }

    pub fn min_level(&self) -> Severity {
        self.min_level
    }
}

impl LogSink for WriterSink {
    fn enabled(&self, level: Severity) -> bool {
        level >= self.min_level
    }

    fn write(&self, _ctx: &Context, level: Severity, line: &[u8]) -> Result<(), LogError> {
        if !self.enabled(level) {
            return Ok(());
        }

        // A panic mid-write can only leave a partial line behind; the
        // stream itself is still usable.
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(line)?;
        out.flush()?;
        Ok(())
    }
}

/// Clonable in-memory byte stream.
///
/// Every clone appends to the same buffer, which makes it a convenient
/// `out` for [`LogFacade::new`](crate::facade::LogFacade::new) when the
/// records need to be read back.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn buf(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf()).into_owned()
    }

    /// Snapshot split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.buf().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
