// src/record.rs
//
// Typed extraction output. Absence of a field is data ("n/a"), never an
// error: a junk or empty page yields a fully formed record with sentinel
// values, and the caller decides what to surface.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel for "field not found". Distinct from the key being absent.
pub const NA: &str = "n/a";

/// A single extracted field: raw text, a coerced integer, or not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
    Na,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Na => f.write_str(NA),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => ser.serialize_str(s),
            Value::Int(n) => ser.serialize_i64(*n),
            Value::Na => ser.serialize_str(NA),
        }
    }
}

/// One page module's worth of extracted fields, keyed by sensor key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleRecord(pub BTreeMap<&'static str, Value>);

impl ModuleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: Value) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow a field's text, if it was found and is still raw text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

/// How a device is attached to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Wifi,
    Mesh,
    Wired,
    #[default]
    #[serde(rename = "n/a")]
    Na,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "wifi",
            ConnectionType::Mesh => "mesh",
            ConnectionType::Wired => "wired",
            ConnectionType::Na => NA,
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the device table. Every field is best-effort; a record only
/// exists at all if a MAC or an IP was recovered from the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub hostname: String,
    pub ip: String,
    pub mac: String,
    pub upload_speed: String,
    pub download_speed: String,
    pub signal: String,
    pub online_time: String,
    pub connection: ConnectionType,
    /// Epoch seconds of the last poll that saw this device. Only stamped
    /// for watched devices by the presence tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<u64>,
}

impl Default for DeviceRecord {
    fn default() -> Self {
        Self {
            hostname: NA.into(),
            ip: NA.into(),
            mac: NA.into(),
            upload_speed: NA.into(),
            download_speed: NA.into(),
            signal: NA.into(),
            online_time: NA.into(),
            connection: ConnectionType::Na,
            last_seen: None,
        }
    }
}

impl DeviceRecord {
    pub fn has_identity(&self) -> bool {
        self.mac != NA || self.ip != NA
    }
}

/// Presence state across polls: watch identifier → last known record.
/// Rebuilt from scratch on every merge; publish by replacing the whole map.
pub type PresenceSnapshot = BTreeMap<String, DeviceRecord>;
