//! Field-wise merge of two configuration documents.
//!
//! The rule is deliberately small: start from the defaults, then every key
//! present in the overrides replaces the default's value.  Keys absent from
//! the overrides keep the default (which may itself be absent).  A key that
//! is present with a JSON `null` value counts as present.

use super::configuration::Configuration;

/// Which source wins when both the environment and the persisted document
/// carry the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Persisted values override environment values.  This is what the
    /// service does.
    #[default]
    PersistedWins,
    /// Environment values override persisted values.  Available to embedders
    /// that want the environment to be authoritative; the server never
    /// selects it.
    EnvironmentWins,
}

impl Precedence {
    /// Merges the environment snapshot and the persisted document according
    /// to this policy.
    pub fn apply(self, environment: &Configuration, persisted: &Configuration) -> Configuration {
        match self {
            Precedence::PersistedWins => merge(environment, persisted),
            Precedence::EnvironmentWins => merge(persisted, environment),
        }
    }
}

/// Returns `defaults` with every key of `overrides` laid over it.
///
/// Keys keep the position they first appeared in: keys from `defaults`
/// first, then keys only `overrides` has, in their own order.
pub fn merge(defaults: &Configuration, overrides: &Configuration) -> Configuration {
    let mut merged = defaults.clone();
    for (key, value) in overrides.iter() {
        merged.set(key, value.clone());
    }
    merged
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn cfg(value: Value) -> Configuration {
        serde_json::from_value(value).expect("object")
    }

    #[test]
    fn test_override_wins_for_shared_key() {
        // Arrange
        let env = cfg(json!({"botName": "Bot", "debugMode": false}));
        let file = cfg(json!({"botName": "Custom"}));

        // Act
        let merged = merge(&env, &file);

        // Assert
        assert_eq!(merged, cfg(json!({"botName": "Custom", "debugMode": false})));
    }

    #[test]
    fn test_empty_overrides_return_defaults() {
        let env = cfg(json!({"prefix": "?", "syncCommands": true}));
        assert_eq!(merge(&env, &Configuration::new()), env);
    }

    #[test]
    fn test_empty_defaults_return_overrides() {
        let file = cfg(json!({"ownerId": "42", "theme": "dark"}));
        assert_eq!(merge(&Configuration::new(), &file), file);
    }

    #[test]
    fn test_null_override_replaces_default() {
        let env = cfg(json!({"statusText": "online"}));
        let file = cfg(json!({"statusText": null}));

        let merged = merge(&env, &file);

        assert_eq!(merged.get("statusText"), Some(&Value::Null));
    }

    #[test]
    fn test_new_keys_are_appended_after_defaults() {
        let env = cfg(json!({"botName": "Bot", "prefix": "!"}));
        let file = cfg(json!({"theme": "dark", "botName": "Custom"}));

        let merged = merge(&env, &file);

        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec!["botName", "prefix", "theme"]
        );
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let env = cfg(json!({"botName": "Bot"}));
        let file = cfg(json!({"botName": "Custom"}));

        let _ = merge(&env, &file);

        assert_eq!(env.get("botName"), Some(&json!("Bot")));
        assert_eq!(file.get("botName"), Some(&json!("Custom")));
    }

    #[test]
    fn test_default_precedence_is_persisted_wins() {
        assert_eq!(Precedence::default(), Precedence::PersistedWins);
    }

    #[test]
    fn test_environment_wins_precedence_reverses_operands() {
        let env = cfg(json!({"botName": "Bot"}));
        let file = cfg(json!({"botName": "Custom", "prefix": "!"}));

        let persisted_wins = Precedence::PersistedWins.apply(&env, &file);
        let env_wins = Precedence::EnvironmentWins.apply(&env, &file);

        assert_eq!(persisted_wins.get("botName"), Some(&json!("Custom")));
        assert_eq!(env_wins.get("botName"), Some(&json!("Bot")));
        // Keys only one side has survive either way.
        assert_eq!(env_wins.get("prefix"), Some(&json!("!")));
    }
}
