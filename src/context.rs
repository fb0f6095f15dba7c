use tokio_util::sync::CancellationToken;

/// Opaque per-call token handed through to [`LogSink::write`].
///
/// The facade never looks at it. Sinks with a cancellation-aware write
/// path may check [`Context::is_cancelled`] before doing I/O.
///
/// [`LogSink::write`]: crate::sink::LogSink::write
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: Option<CancellationToken>,
}

/// Handle that cancels the [`Context`] it was created with.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    token: CancellationToken,
}

pub(crate) static BACKGROUND: Context = Context { token: None };

impl Context {
    /// A context that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the handle that cancels it.
    pub fn with_cancel() -> (Self, CancelHandle) {
        let token = CancellationToken::new();
        (
            Self { token: Some(token.clone()) },
            CancelHandle { token },
        )
    }

    /// Context observing an existing token, e.g. a service's shutdown token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self { token: Some(token) }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token
            .as_ref()
            .map(CancellationToken::is_cancelled)
            .unwrap_or(false)
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }
}
