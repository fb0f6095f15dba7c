use std::io;

/// Failure while emitting a single record.
///
/// Leveled calls on [`LogFacade`](crate::facade::LogFacade) drop these;
/// the `try_*` variants return them.
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("log sink write failed: {0}")]
    SinkWrite(#[from] io::Error),
}
