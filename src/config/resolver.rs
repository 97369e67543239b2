//! Configuration resolution
//!
//! Merges per-invocation overrides, the persisted file and the built-in
//! defaults into one `ResolvedConfig`. Precedence is field by field:
//! overrides > persisted > defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::paths::absolutize;
use super::types::{ConfigOverrides, DefaultConfig, PersistedConfig, ResolvedConfig};

/// Resolve the configuration for one invocation.
///
/// Pure: performs no IO. Relative override paths are anchored at
/// `defaults.project_root` (the invoking working directory).
pub fn resolve(
    overrides: &ConfigOverrides,
    persisted: &PersistedConfig,
    defaults: &DefaultConfig,
) -> Result<ResolvedConfig, ConfigError> {
    if overrides.purge && overrides.unset_purge {
        return Err(ConfigError::ConflictingPurgeIntent);
    }

    let empty = PersistedConfig::default();
    let persisted = if overrides.reset_to_defaults {
        &empty
    } else {
        persisted
    };

    let root = &defaults.project_root;
    let config_script_path = pick_path(
        root,
        overrides.config_script.as_deref(),
        persisted.config_js.as_deref(),
        &defaults.config_script_path,
    );
    let source_path = pick_path(
        root,
        overrides.source.as_deref(),
        persisted.source_css.as_deref(),
        &defaults.source_path,
    );
    let output_path = pick_path(
        root,
        overrides.output.as_deref(),
        persisted.output_css.as_deref(),
        &defaults.output_path,
    );

    let purge_enabled = overrides
        .purge_intent()
        .or(persisted.purge)
        .unwrap_or(defaults.purge_enabled);

    let preprocessor_enabled = if overrides.preprocessor {
        true
    } else {
        persisted.sass.unwrap_or(defaults.preprocessor_enabled)
    };

    if source_path == output_path {
        return Err(ConfigError::SameSourceAndOutput { path: source_path });
    }

    Ok(ResolvedConfig {
        project_root: root.clone(),
        config_script_path,
        source_path,
        output_path,
        purge_enabled,
        preprocessor_enabled,
    })
}

fn pick_path(root: &Path, over: Option<&Path>, stored: Option<&Path>, fallback: &Path) -> PathBuf {
    absolutize(root, over.or(stored).unwrap_or(fallback))
}
