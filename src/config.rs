//! Environment and serde configuration for building a [`LogFacade`].
//!
//! These are purely helpers; [`LogFacade`] itself never touches the
//! environment.

use crate::facade::LogFacade;
use crate::level::{log_level_from_str, Severity};
use crate::writer::WriterSink;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Service name attached to every record.
pub const LOG_SERVICE_NAME_ENV: &str = "LOG_SERVICE_NAME";

/// Minimum level, parsed with [`log_level_from_str`].
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Output target, see [`parse_output`].
pub const LOG_OUTPUT_ENV: &str = "LOG_OUTPUT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Where a configured facade writes its records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Appended to, created if missing.
    File(PathBuf),
}

/// Parse an output target string.
///
/// Examples:
/// - "stdout"
/// - "stderr"
/// - "file:///var/log/auth-svc.log"
/// - "file:logs/auth-svc.log"
pub fn parse_output(raw: &str) -> Result<OutputTarget, ConfigError> {
    let lower = raw.to_ascii_lowercase();

    if lower == "stdout" {
        Ok(OutputTarget::Stdout)
    } else if lower == "stderr" {
        Ok(OutputTarget::Stderr)
    } else if lower.starts_with("file://") {
        file_target(&raw["file://".len()..], raw)
    } else if lower.starts_with("file:") {
        file_target(&raw["file:".len()..], raw)
    } else {
        Err(ConfigError::UnknownOutput(raw.to_string()))
    }
}

fn file_target(path: &str, raw: &str) -> Result<OutputTarget, ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::UnknownOutput(raw.to_string()));
    }
    Ok(OutputTarget::File(PathBuf::from(path)))
}

impl<'de> Deserialize<'de> for OutputTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_output(&raw).map_err(serde::de::Error::custom)
    }
}

/// Error type returned when turning configuration into a facade.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("service name must not be empty")]
    EmptyServiceName,

    #[error("unknown or unsupported log output: {0:?}")]
    UnknownOutput(String),

    #[error("failed to open log file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Declarative facade configuration.
///
/// Deserializable from any serde format; `min_level` goes through the
/// same lossy parsing as [`log_level_from_str`], so a malformed level
/// never fails and ends up as [`Severity::Error`].
#[derive(Debug, Clone, Deserialize)]
pub struct FacadeConfig {
    pub service_name: String,
    #[serde(default = "default_min_level")]
    pub min_level: Severity,
    #[serde(default)]
    pub output: OutputTarget,
}

fn default_min_level() -> Severity {
    Severity::Info
}

impl FacadeConfig {
    pub fn new(service_name: impl Into<String>, min_level: Severity) -> Self {
        FacadeConfig {
            service_name: service_name.into(),
            min_level,
            output: OutputTarget::Stdout,
        }
    }

    /// Build a config from `LOG_SERVICE_NAME`, `LOG_LEVEL` and `LOG_OUTPUT`.
    ///
    /// A missing `LOG_LEVEL` means `INFO` and a missing `LOG_OUTPUT` means
    /// `stdout`. A missing service name is left empty and rejected by
    /// [`FacadeConfig::build`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(FacadeConfig {
            service_name: env_or(LOG_SERVICE_NAME_ENV, ""),
            min_level: log_level_from_str(&env_or(LOG_LEVEL_ENV, "INFO")),
            output: parse_output(&env_or(LOG_OUTPUT_ENV, "stdout"))?,
        })
    }

    /// Open the configured output and construct the facade.
    pub fn build(&self) -> Result<LogFacade, ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::EmptyServiceName);
        }

        let sink = match &self.output {
            OutputTarget::Stdout => WriterSink::stdout(self.min_level),
            OutputTarget::Stderr => WriterSink::stderr(self.min_level),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| ConfigError::OpenFile { path: path.clone(), source })?;
                WriterSink::new(Box::new(file), self.min_level)
            }
        };

        Ok(LogFacade::with_sink(self.service_name.clone(), Arc::new(sink)))
    }
}
