//! The environment snapshot: configuration defaults captured at startup.
//!
//! Coercion rules, per field kind:
//!
//! | Kind | Variable unset | Variable empty | `"true"` | anything else |
//! |------|----------------|----------------|----------|---------------|
//! | Text | absent         | `""`           | `"true"` | the value     |
//! | Flag | absent         | absent         | `true`   | `false`       |
//!
//! No input is an error.  Absent fields stay absent; the snapshot never
//! guesses a default for them.

use serde_json::Value;

use super::configuration::{ConfigField, Configuration, FieldKind};

/// The only value a flag variable accepts as "on".
pub const TRUTHY_TOKEN: &str = "true";

/// Immutable configuration defaults read from the environment.
///
/// There are no mutators: once built, the snapshot is handed to the
/// resolver and only ever read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentSnapshot {
    config: Configuration,
}

impl EnvironmentSnapshot {
    /// Builds a snapshot by asking `lookup` for each field's variable.
    ///
    /// `lookup` returns `None` for an unset variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Configuration::new();
        for field in ConfigField::ALL {
            if let Some(value) = coerce(field.kind(), lookup(field.env_var())) {
                config.set(field.json_key(), value);
            }
        }
        Self { config }
    }

    /// An empty snapshot, as if no `BOT_*` variable were set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_config(&self) -> &Configuration {
        &self.config
    }

    pub fn into_config(self) -> Configuration {
        self.config
    }
}

fn coerce(kind: FieldKind, raw: Option<String>) -> Option<Value> {
    let raw = raw?;
    match kind {
        FieldKind::Text => Some(Value::String(raw)),
        FieldKind::Flag if raw.is_empty() => None,
        FieldKind::Flag => Some(Value::Bool(raw == TRUTHY_TOKEN)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot_of(vars: &[(&str, &str)]) -> EnvironmentSnapshot {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentSnapshot::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_no_variables_yields_empty_snapshot() {
        let snap = snapshot_of(&[]);
        assert!(snap.as_config().is_empty());
        assert_eq!(snap, EnvironmentSnapshot::empty());
    }

    #[test]
    fn test_text_variables_pass_through() {
        // Arrange / Act
        let snap = snapshot_of(&[
            ("BOT_NAME", "Delta"),
            ("BOT_PREFIX", "!"),
            ("BOT_OWNER_ID", "1234567890"),
            ("BOT_ACTIVITY_TYPE", "PLAYING"),
            ("BOT_STATUS_TEXT", "with fire"),
            ("BOT_ONLINE_STATUS", "dnd"),
        ]);
        let cfg = snap.as_config();

        // Assert
        assert_eq!(cfg.text(ConfigField::BotName), Some("Delta"));
        assert_eq!(cfg.text(ConfigField::Prefix), Some("!"));
        assert_eq!(cfg.text(ConfigField::OwnerId), Some("1234567890"));
        assert_eq!(cfg.text(ConfigField::ActivityType), Some("PLAYING"));
        assert_eq!(cfg.text(ConfigField::StatusText), Some("with fire"));
        assert_eq!(cfg.text(ConfigField::OnlineStatus), Some("dnd"));
        assert_eq!(cfg.len(), 6);
    }

    #[test]
    fn test_empty_text_variable_is_kept() {
        let snap = snapshot_of(&[("BOT_STATUS_TEXT", "")]);
        assert_eq!(snap.as_config().text(ConfigField::StatusText), Some(""));
    }

    #[test]
    fn test_flag_exact_truthy_token_is_true() {
        let snap = snapshot_of(&[("BOT_DEBUG_MODE", "true")]);
        assert_eq!(snap.as_config().flag(ConfigField::DebugMode), Some(true));
    }

    #[test]
    fn test_flag_other_values_are_false() {
        for raw in ["false", "TRUE", "True", "1", "yes", " true", "true "] {
            let snap = snapshot_of(&[("BOT_DEVELOPER_MODE", raw)]);
            assert_eq!(
                snap.as_config().flag(ConfigField::DeveloperMode),
                Some(false),
                "value {raw:?}"
            );
        }
    }

    #[test]
    fn test_flag_empty_or_unset_is_absent() {
        let snap = snapshot_of(&[("BOT_SYNC_COMMANDS", "")]);
        assert!(!snap.as_config().contains("syncCommands"));

        let snap = snapshot_of(&[]);
        assert_eq!(snap.as_config().flag(ConfigField::SyncCommands), None);
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let snap = snapshot_of(&[("BOT_SYNC_COMMANDS", "true"), ("BOT_NAME", "Delta")]);
        assert_eq!(
            snap.as_config().keys().collect::<Vec<_>>(),
            vec!["botName", "syncCommands"]
        );
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let snap = snapshot_of(&[("PORT", "3001"), ("BOT_THEME", "dark")]);
        assert!(snap.as_config().is_empty());
    }
}
