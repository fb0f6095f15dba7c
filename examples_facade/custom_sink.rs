use std::sync::Arc;

use json_log_facade::{Context, LogError, LogFacade, LogSink, Logger, Severity};

/// Example of plugging in a completely custom destination by implementing
/// the `LogSink` trait directly. Imagine this forwards to some proprietary
/// collector for which this crate does not provide a built-in sink.
struct PrefixedStderrSink {
    min_level: Severity,
}

impl LogSink for PrefixedStderrSink {
    fn enabled(&self, level: Severity) -> bool {
        level >= self.min_level
    }

    fn write(&self, ctx: &Context, level: Severity, line: &[u8]) -> Result<(), LogError> {
        if ctx.is_cancelled() {
            return Ok(());
        }
        // eprint! takes the stderr lock for the whole line.
        eprint!("[my-collector {}] {}", level, String::from_utf8_lossy(line));
        Ok(())
    }
}

fn main() {
    let sink: Arc<dyn LogSink> = Arc::new(PrefixedStderrSink { min_level: Severity::Info });
    let logger = LogFacade::with_sink("custom-sink-example", sink);

    logger.debug(None, "filtered by the sink", &[]);
    logger.info(None, "custom sink example started", &[]);
    logger.errorf(None, format_args!("simulated failure talking to {}", "my-collector"));

    let (ctx, cancel) = Context::with_cancel();
    cancel.cancel();
    logger.error(Some(&ctx), "skipped by this sink because the context is cancelled", &[]);
}
