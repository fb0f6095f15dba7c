use crate::context::Context;
use crate::error::LogError;
use crate::level::Severity;
use crate::sink::LogSink;

/// A sink that simply drops all records.
///
/// Reports every level as disabled, so the facade skips building records
/// entirely. Useful for measuring the call overhead of the facade and for
/// tests that don't care about output.
#[derive(Clone, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn enabled(&self, _level: Severity) -> bool {
        false
    }

    fn write(&self, _ctx: &Context, _level: Severity, _line: &[u8]) -> Result<(), LogError> {
        Ok(())
    }
}
