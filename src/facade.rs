use crate::context::{Context, BACKGROUND};
use crate::error::LogError;
use crate::level::Severity;
use crate::record::{Fields, LogRecord, Payload};
use crate::sink::LogSink;
use crate::writer::WriterSink;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Leveled logging interface applications call through.
///
/// Every method takes an optional [`Context`] that is handed to the sink
/// as-is; `None` stands for [`Context::background`]. Three call shapes are
/// offered at each severity:
///
/// - plain: `info(ctx, "msg", &[json!(1), json!("x")])` puts the arguments
///   under `data` in call order;
/// - fields: `info_with_fields(ctx, "msg", &fields)` writes each entry as
///   its own top-level key;
/// - formatted: `infof(ctx, format_args!("user {}", id))` interpolates
///   into `msg` and writes no `data`.
pub trait Logger: Send + Sync {
    fn log(&self, ctx: Option<&Context>, level: Severity, msg: &str, args: &[Value]);

    fn log_with_fields(&self, ctx: Option<&Context>, level: Severity, msg: &str, fields: &Fields);

    fn logf(&self, ctx: Option<&Context>, level: Severity, args: fmt::Arguments<'_>);

    fn debug(&self, ctx: Option<&Context>, msg: &str, args: &[Value]) {
        self.log(ctx, Severity::Debug, msg, args)
    }

    fn info(&self, ctx: Option<&Context>, msg: &str, args: &[Value]) {
        self.log(ctx, Severity::Info, msg, args)
    }

    fn warn(&self, ctx: Option<&Context>, msg: &str, args: &[Value]) {
        self.log(ctx, Severity::Warn, msg, args)
    }

    fn error(&self, ctx: Option<&Context>, msg: &str, args: &[Value]) {
        self.log(ctx, Severity::Error, msg, args)
    }

    fn debug_with_fields(&self, ctx: Option<&Context>, msg: &str, fields: &Fields) {
        self.log_with_fields(ctx, Severity::Debug, msg, fields)
    }

    fn info_with_fields(&self, ctx: Option<&Context>, msg: &str, fields: &Fields) {
        self.log_with_fields(ctx, Severity::Info, msg, fields)
    }

    fn warn_with_fields(&self, ctx: Option<&Context>, msg: &str, fields: &Fields) {
        self.log_with_fields(ctx, Severity::Warn, msg, fields)
    }

    fn error_with_fields(&self, ctx: Option<&Context>, msg: &str, fields: &Fields) {
        self.log_with_fields(ctx, Severity::Error, msg, fields)
    }

    fn debugf(&self, ctx: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logf(ctx, Severity::Debug, args)
    }

    fn infof(&self, ctx: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logf(ctx, Severity::Info, args)
    }

    fn warnf(&self, ctx: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logf(ctx, Severity::Warn, args)
    }

    fn errorf(&self, ctx: Option<&Context>, args: fmt::Arguments<'_>) {
        self.logf(ctx, Severity::Error, args)
    }
}

/// JSON-emitting [`Logger`] bound to one service name and one sink.
///
/// Cloning is cheap and every clone shares the sink and the dropped-write
/// counter. The facade itself holds no lock: records are built from
/// call-local data and the sink serializes the final write.
#[derive(Clone)]
pub struct LogFacade {
    service: Arc<str>,
    sink: Arc<dyn LogSink>,
    /// Writes that failed at the sink and were discarded.
    dropped_writes: Arc<AtomicU64>,
}

impl LogFacade {
    /// Create a facade writing to `out`, or to standard output when `out`
    /// is `None`. Records below `min_level` are dropped by the sink.
    ///
    /// An empty `service_name` is accepted and produces records with an
    /// empty `service`; [`FacadeConfig::build`](crate::config::FacadeConfig::build)
    /// rejects it.
    pub fn new(
        service_name: impl Into<String>,
        min_level: Severity,
        out: Option<Box<dyn Write + Send>>,
    ) -> Self {
        let sink = match out {
            Some(out) => WriterSink::new(out, min_level),
            None => WriterSink::stdout(min_level),
        };
        Self::with_sink(service_name, Arc::new(sink))
    }

    /// Create a facade over a custom [`LogSink`]. Level filtering is up to
    /// the sink.
    pub fn with_sink(service_name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        let service: String = service_name.into();
        LogFacade {
            service: Arc::from(service),
            sink,
            dropped_writes: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service
    }

    /// Number of records lost to sink write failures across all clones.
    pub fn dropped_writes(&self) -> u64 {
        self.dropped_writes.load(Ordering::Relaxed)
    }

    /// Like [`Logger::log`] but reports a failed write to the caller.
    pub fn try_log(
        &self,
        ctx: Option<&Context>,
        level: Severity,
        msg: &str,
        args: &[Value],
    ) -> Result<(), LogError> {
        self.emit(ctx, level, || (Cow::Borrowed(msg), Payload::Data(args)))
    }

    /// Like [`Logger::log_with_fields`] but reports a failed write.
    pub fn try_log_with_fields(
        &self,
        ctx: Option<&Context>,
        level: Severity,
        msg: &str,
        fields: &Fields,
    ) -> Result<(), LogError> {
        self.emit(ctx, level, || (Cow::Borrowed(msg), Payload::Fields(fields)))
    }

    /// Like [`Logger::logf`] but reports a failed write.
    pub fn try_logf(
        &self,
        ctx: Option<&Context>,
        level: Severity,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError> {
        self.emit(ctx, level, || (Cow::Owned(fmt::format(args)), Payload::Empty))
    }

    fn emit<'a, F>(&self, ctx: Option<&Context>, level: Severity, build: F) -> Result<(), LogError>
    where
        F: FnOnce() -> (Cow<'a, str>, Payload<'a>),
    {
        if !self.sink.enabled(level) {
            return Ok(());
        }

        let (msg, payload) = build();
        let record = LogRecord::now(level, msg, &self.service, payload);
        let line = record.encode_line()?;
        self.sink.write(ctx.unwrap_or(&BACKGROUND), level, &line)
    }

    fn discard(&self, result: Result<(), LogError>) {
        if result.is_err() {
            self.dropped_writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Logger for LogFacade {
    fn log(&self, ctx: Option<&Context>, level: Severity, msg: &str, args: &[Value]) {
        self.discard(self.try_log(ctx, level, msg, args));
    }

    fn log_with_fields(&self, ctx: Option<&Context>, level: Severity, msg: &str, fields: &Fields) {
        self.discard(self.try_log_with_fields(ctx, level, msg, fields));
    }

    fn logf(&self, ctx: Option<&Context>, level: Severity, args: fmt::Arguments<'_>) {
        self.discard(self.try_logf(ctx, level, args));
    }
}

impl fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacade")
            .field("service", &self.service)
            .field("dropped_writes", &self.dropped_writes())
            .finish_non_exhaustive()
    }
}
