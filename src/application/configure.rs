//! Configure Use Case
//!
//! Resolves overrides against the stored configuration and writes the
//! result back. Nothing is written when resolution fails.

use std::path::Path;

use crate::config::{
    resolve, ConfigOverrides, ConfigStore, ConfigWarning, DefaultConfig, LoadedConfig,
    ResolvedConfig,
};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ConfigureResult {
    pub config: ResolvedConfig,
    /// Whether a previous file existed and was replaced
    pub replaced: bool,
    pub warnings: Vec<ConfigWarning>,
}

pub struct ConfigureUseCase {
    store: ConfigStore,
}

impl ConfigureUseCase {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        project_root: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<ConfigureResult, ConfigError> {
        if overrides.purge && overrides.unset_purge {
            return Err(ConfigError::ConflictingPurgeIntent);
        }
        // A reset discards the stored values, so an unreadable file is
        // replaced rather than reported
        let loaded = if overrides.reset_to_defaults {
            LoadedConfig {
                found: self.store.path().exists(),
                ..LoadedConfig::default()
            }
        } else {
            self.store.load()?
        };
        let config = resolve(
            overrides,
            &loaded.config,
            &DefaultConfig::for_project(project_root),
        )?;
        self.store.persist(&config)?;
        tracing::info!(path = %self.store.path().display(), "configuration saved");

        Ok(ConfigureResult {
            config,
            replaced: loaded.found,
            warnings: loaded.warnings,
        })
    }
}

/// Load the store and resolve a configuration for build/watch/purge
pub fn load_resolved(
    store: &ConfigStore,
    project_root: &Path,
    overrides: &ConfigOverrides,
) -> Result<(ResolvedConfig, Vec<ConfigWarning>), ConfigError> {
    let loaded = store.load()?;
    let config = resolve(
        overrides,
        &loaded.config,
        &DefaultConfig::for_project(project_root),
    )?;
    Ok((config, loaded.warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn conflicting_purge_writes_nothing() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::in_project(dir.path());
        let overrides = ConfigOverrides::new().with_purge(true).with_unset_purge(true);

        let err = ConfigureUseCase::new(store.clone())
            .execute(dir.path(), &overrides)
            .unwrap_err();

        assert!(matches!(err, ConfigError::ConflictingPurgeIntent));
        assert!(!store.path().exists());
    }

    #[test]
    fn conflicting_purge_is_reported_before_a_malformed_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::in_project(dir.path());
        fs::write(store.path(), "purge = [\n").unwrap();
        let overrides = ConfigOverrides::new().with_purge(true).with_unset_purge(true);

        let err = ConfigureUseCase::new(store.clone())
            .execute(dir.path(), &overrides)
            .unwrap_err();

        assert!(matches!(err, ConfigError::ConflictingPurgeIntent));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "purge = [\n");
    }

    #[test]
    fn configure_default_replaces_a_malformed_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::in_project(dir.path());
        fs::write(store.path(), "purge = [\n").unwrap();

        let result = ConfigureUseCase::new(store.clone())
            .execute(dir.path(), &ConfigOverrides::new().with_reset_to_defaults(true))
            .unwrap();

        assert!(result.replaced);
        assert!(result.warnings.is_empty());
        let (config, _) = load_resolved(&store, dir.path(), &ConfigOverrides::new()).unwrap();
        assert!(!config.purge_enabled);
    }

    #[test]
    fn configure_then_load_resolved_round_trips() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::in_project(dir.path());
        let overrides = ConfigOverrides::new()
            .with_source(dir.path().join("src/app.css"))
            .with_output(dir.path().join("dist/app.css"));

        let result = ConfigureUseCase::new(store.clone())
            .execute(dir.path(), &overrides)
            .unwrap();
        assert!(!result.replaced);

        let (config, warnings) = load_resolved(&store, dir.path(), &ConfigOverrides::new()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.source_path, dir.path().join("src/app.css"));
        assert_eq!(config.output_path, dir.path().join("dist/app.css"));
        assert!(!config.purge_enabled);
    }

    #[test]
    fn configure_default_drops_stored_values() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::in_project(dir.path());
        fs::write(store.path(), "purge = true\nsass = true\n").unwrap();

        let result = ConfigureUseCase::new(store.clone())
            .execute(dir.path(), &ConfigOverrides::new().with_reset_to_defaults(true))
            .unwrap();

        assert!(result.replaced);
        assert!(!result.config.purge_enabled);
        assert!(!result.config.preprocessor_enabled);
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("purge = false"));
    }
}
