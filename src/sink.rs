use crate::context::Context;
use crate::error::LogError;
use crate::level::Severity;

/// Destination for encoded records produced by the facade.
///
/// Implementations own level filtering and must keep each `write` atomic:
/// two concurrent calls may never interleave their bytes.
pub trait LogSink: Send + Sync {
    /// Whether records at `level` would be written at all.
    ///
    /// The facade asks this before building a record so disabled levels
    /// cost nothing. Default implementation accepts every level.
    fn enabled(&self, _level: Severity) -> bool {
        true
    }

    /// Write one encoded record.
    ///
    /// **Parameters**
    /// - `ctx`: the caller's context, passed through untouched.
    /// - `level`: severity of the record, for sinks that filter.
    /// - `line`: one JSON object terminated by `\n`.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was written or deliberately filtered out.
    /// - `Err(..)` if the underlying stream rejected the write.
    fn write(&self, ctx: &Context, level: Severity, line: &[u8]) -> Result<(), LogError>;
}
