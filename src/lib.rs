pub mod context;
pub mod error;
pub mod level;
pub mod record;
pub mod sink;
pub mod writer;
pub mod noop_sink;
pub mod facade;
pub mod config;

#[cfg(feature = "bridge")]
pub mod layer;
#[cfg(feature = "bridge")]
pub mod init;

pub use context::{CancelHandle, Context};
pub use error::LogError;
pub use facade::{LogFacade, Logger};
pub use level::{log_level_from_str, Severity};
pub use record::{Fields, LogRecord, Payload};
pub use sink::LogSink;
pub use writer::{SharedBuffer, WriterSink};
