//! The configuration document and its well-known fields.
//!
//! A [`Configuration`] is a flat JSON object.  Nine keys have a known meaning
//! (see [`ConfigField`]) but none of them is required, and keys the service
//! does not know about are carried through untouched.  That matches how the
//! document is used: the frontend owns the shape, the service only stores it
//! and layers it over environment defaults.
//!
//! ```json
//! {
//!   "botName": "Delta",
//!   "prefix": "!",
//!   "debugMode": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a well-known field holds free text or an on/off flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
}

/// The well-known configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    BotName,
    Prefix,
    OwnerId,
    ActivityType,
    StatusText,
    OnlineStatus,
    DebugMode,
    DeveloperMode,
    SyncCommands,
}

impl ConfigField {
    /// Every well-known field, in document order.
    pub const ALL: [ConfigField; 9] = [
        ConfigField::BotName,
        ConfigField::Prefix,
        ConfigField::OwnerId,
        ConfigField::ActivityType,
        ConfigField::StatusText,
        ConfigField::OnlineStatus,
        ConfigField::DebugMode,
        ConfigField::DeveloperMode,
        ConfigField::SyncCommands,
    ];

    /// Key used in the JSON document and the HTTP API.
    pub fn json_key(self) -> &'static str {
        match self {
            ConfigField::BotName => "botName",
            ConfigField::Prefix => "prefix",
            ConfigField::OwnerId => "ownerId",
            ConfigField::ActivityType => "activityType",
            ConfigField::StatusText => "statusText",
            ConfigField::OnlineStatus => "onlineStatus",
            ConfigField::DebugMode => "debugMode",
            ConfigField::DeveloperMode => "developerMode",
            ConfigField::SyncCommands => "syncCommands",
        }
    }

    /// Environment variable that seeds this field's default.
    pub fn env_var(self) -> &'static str {
        match self {
            ConfigField::BotName => "BOT_NAME",
            ConfigField::Prefix => "BOT_PREFIX",
            ConfigField::OwnerId => "BOT_OWNER_ID",
            ConfigField::ActivityType => "BOT_ACTIVITY_TYPE",
            ConfigField::StatusText => "BOT_STATUS_TEXT",
            ConfigField::OnlineStatus => "BOT_ONLINE_STATUS",
            ConfigField::DebugMode => "BOT_DEBUG_MODE",
            ConfigField::DeveloperMode => "BOT_DEVELOPER_MODE",
            ConfigField::SyncCommands => "BOT_SYNC_COMMANDS",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::DebugMode | ConfigField::DeveloperMode | ConfigField::SyncCommands => {
                FieldKind::Flag
            }
            _ => FieldKind::Text,
        }
    }

    /// Looks up a well-known field by its JSON key.
    pub fn from_json_key(key: &str) -> Option<ConfigField> {
        Self::ALL.into_iter().find(|f| f.json_key() == key)
    }
}

/// A flat, insertion-ordered JSON object of configuration values.
///
/// Serializes as (and only deserializes from) a JSON object.  Arrays,
/// strings or numbers at the top level are rejected by `Deserialize`, which
/// the resolver treats as a malformed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document.  The top level must be an object.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Renders the document the way it is written to disk: pretty-printed
    /// with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets `key`, keeping its position if it was already present.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn set_text(&mut self, field: ConfigField, value: impl Into<String>) {
        self.set(field.json_key(), Value::String(value.into()));
    }

    pub fn set_flag(&mut self, field: ConfigField, value: bool) {
        self.set(field.json_key(), Value::Bool(value));
    }

    /// Returns the field as text, or `None` if it is absent or not a string.
    pub fn text(&self, field: ConfigField) -> Option<&str> {
        self.get(field.json_key()).and_then(Value::as_str)
    }

    /// Returns the field as a flag, or `None` if it is absent or not a bool.
    pub fn flag(&self, field: ConfigField) -> Option<bool> {
        self.get(field.json_key()).and_then(Value::as_bool)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys present in the document that are not a [`ConfigField`].
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|k| ConfigField::from_json_key(k).is_none())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Configuration> for Map<String, Value> {
    fn from(config: Configuration) -> Self {
        config.0
    }
}

impl FromIterator<(String, Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
