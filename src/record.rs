use crate::error::LogError;
use crate::level::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Field mapping accepted by the field-annotated calls.
pub type Fields = Map<String, Value>;

/// What a record carries besides the built-in keys. Borrows the caller's
/// arguments for the duration of the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    /// Formatted calls: the arguments were interpolated into `msg`.
    Empty,
    /// Plain calls: arguments in call order under `data`.
    Data(&'a [Value]),
    /// Field-annotated calls: each entry becomes a top-level key.
    Fields(&'a Fields),
}

/// One structured log event. Built, encoded and written inside the call
/// that produced it; never retained afterwards.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub time: DateTime<Utc>,
    pub level: Severity,
    pub msg: Cow<'a, str>,
    pub service: &'a str,
    pub payload: Payload<'a>,
}

impl<'a> LogRecord<'a> {
    /// Build a record stamped with the current wall-clock time.
    pub fn now(
        level: Severity,
        msg: impl Into<Cow<'a, str>>,
        service: &'a str,
        payload: Payload<'a>,
    ) -> Self {
        LogRecord {
            time: Utc::now(),
            level,
            msg: msg.into(),
            service,
            payload,
        }
    }

    /// Encode as a single JSON object followed by `\n`.
    pub fn encode_line(&self) -> Result<Vec<u8>, LogError> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

impl Serialize for LogRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("time", &self.time.to_rfc3339_opts(SecondsFormat::AutoSi, true))?;
        map.serialize_entry("level", &self.level)?;
        map.serialize_entry("msg", &self.msg)?;
        map.serialize_entry("service", &self.service)?;

        match self.payload {
            Payload::Empty => {}
            Payload::Data(args) => map.serialize_entry("data", args)?,
            Payload::Fields(fields) => {
                // Sorted regardless of how the caller's map orders its keys.
                // Keys equal to a built-in one are written again, not merged.
                let sorted: BTreeMap<&String, &Value> = fields.iter().collect();
                for (key, value) in sorted {
                    map.serialize_entry(key, value)?;
                }
            }
        }

        map.end()
    }
}
