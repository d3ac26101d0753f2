//! Process environment adapter for the environment snapshot.

use tracing::debug;

use crate::domain::snapshot::EnvironmentSnapshot;

/// Captures the `BOT_*` variables from the current process environment.
///
/// Call this once at startup and hand the result to the resolver; later
/// changes to the environment are not observed.  Variables whose value is
/// not valid UTF-8 are treated as unset.
pub fn load_environment_snapshot() -> EnvironmentSnapshot {
    let snapshot = EnvironmentSnapshot::from_lookup(|name| std::env::var(name).ok());
    debug!(
        "environment snapshot captured with {} field(s): {:?}",
        snapshot.as_config().len(),
        snapshot.as_config().keys().collect::<Vec<_>>()
    );
    snapshot
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::ConfigField;

    fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
        ConfigField::ALL.iter().map(|f| (f.env_var(), None)).collect()
    }

    #[test]
    fn test_load_reads_process_environment() {
        // Arrange: clear every BOT_* variable, then set a few.
        let mut vars = all_unset();
        vars.extend([
            ("BOT_NAME", Some("Delta")),
            ("BOT_PREFIX", Some("!")),
            ("BOT_DEBUG_MODE", Some("true")),
            ("BOT_SYNC_COMMANDS", Some("no")),
        ]);

        // Act
        let snap = temp_env::with_vars(vars, load_environment_snapshot);

        // Assert
        let cfg = snap.as_config();
        assert_eq!(cfg.text(ConfigField::BotName), Some("Delta"));
        assert_eq!(cfg.text(ConfigField::Prefix), Some("!"));
        assert_eq!(cfg.flag(ConfigField::DebugMode), Some(true));
        assert_eq!(cfg.flag(ConfigField::SyncCommands), Some(false));
        assert_eq!(cfg.flag(ConfigField::DeveloperMode), None);
        assert_eq!(cfg.len(), 4);
    }

    #[test]
    fn test_load_with_nothing_set_is_empty() {
        let snap = temp_env::with_vars(all_unset(), load_environment_snapshot);
        assert!(snap.as_config().is_empty());
    }

    #[test]
    fn test_snapshot_does_not_observe_later_changes() {
        let mut vars = all_unset();
        vars.push(("BOT_NAME", Some("Before")));
        let snap = temp_env::with_vars(vars, load_environment_snapshot);

        temp_env::with_var("BOT_NAME", Some("After"), || {
            assert_eq!(snap.as_config().text(ConfigField::BotName), Some("Before"));
        });
    }
}
