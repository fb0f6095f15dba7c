use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordered record severity: `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Upper-case name used in the `level` key of every record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Map a level name to a [`Severity`].
///
/// Matching is ASCII case-insensitive. Anything that is not `debug`,
/// `info` or `warn` (including the empty string) maps to
/// [`Severity::Error`], so this never fails.
pub fn log_level_from_str(level: &str) -> Severity {
    if level.eq_ignore_ascii_case("DEBUG") {
        Severity::Debug
    } else if level.eq_ignore_ascii_case("INFO") {
        Severity::Info
    } else if level.eq_ignore_ascii_case("WARN") {
        Severity::Warn
    } else {
        Severity::Error
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(log_level_from_str(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(log_level_from_str(&raw))
    }
}

#[cfg(feature = "bridge")]
impl From<&tracing::Level> for Severity {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_is_case_insensitive() {
        for raw in ["debug", "DEBUG", "DeBuG"] {
            assert_eq!(log_level_from_str(raw), Severity::Debug);
        }
        assert_eq!(log_level_from_str("info"), Severity::Info);
        assert_eq!(log_level_from_str("Warn"), Severity::Warn);
        assert_eq!(log_level_from_str("error"), Severity::Error);
    }

    #[test]
    fn unrecognized_names_fall_back_to_error() {
        for raw in ["bogus", "", "INF", "warning", " info", "trace"] {
            assert_eq!(log_level_from_str(raw), Severity::Error, "input {raw:?}");
        }
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn serde_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"WARN\"");
        let parsed: Severity = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(parsed, Severity::Error);
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    }
}
