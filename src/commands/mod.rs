//! Command handlers
//!
//! Each subcommand resolves what it needs, calls one use case and renders
//! the outcome. All paths are anchored at the invoking working directory.

mod build;
mod configure;
mod factory;
mod purge;
mod scripts;
mod watch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use ngtw::application::load_resolved;
use ngtw::config::{ConfigOverrides, ConfigStore, ConfigWarning, ResolvedConfig};
use ngtw::error::{ConfigError, NgtwError};

use crate::cli::Commands;
use crate::ui::context::UiContext;

pub fn dispatch(command: Commands, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Build { purge, config } => build::cmd_build(purge, config.as_deref(), ui),
        Commands::Watch { config } => watch::cmd_watch(config.as_deref(), ui),
        Commands::Configure {
            config,
            source,
            output,
            default,
            purge,
            unset_purge,
            sass,
        } => {
            let mut overrides = ConfigOverrides::new()
                .with_purge(purge)
                .with_unset_purge(unset_purge)
                .with_preprocessor(sass)
                .with_reset_to_defaults(default);
            if let Some(path) = config {
                overrides = overrides.with_config_script(path);
            }
            if let Some(path) = source {
                overrides = overrides.with_source(path);
            }
            if let Some(path) = output {
                overrides = overrides.with_output(path);
            }
            configure::cmd_configure(&overrides, ui)
        }
        Commands::Scripts => scripts::cmd_scripts(ui),
        Commands::Purge {
            config,
            keyframes,
            fontface,
            rejected,
        } => purge::cmd_purge(config.as_deref(), keyframes, fontface, rejected, ui),
    }
}

/// The invoking working directory
pub(crate) fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| NgtwError::from(ConfigError::WorkingDir(e)))?;
    Ok(cwd)
}

/// `--config <path>` for build/watch/purge, else `./ng-tailwind.toml`
pub(crate) fn store_for(root: &Path, alternate: Option<&Path>) -> ConfigStore {
    match alternate {
        Some(path) => ConfigStore::new(root.join(path)),
        None => ConfigStore::in_project(root),
    }
}

/// Resolve the configuration for build/watch/purge and report unknown keys
pub(crate) fn resolve_config(
    root: &Path,
    alternate: Option<&Path>,
    overrides: &ConfigOverrides,
    ui: &UiContext,
) -> Result<ResolvedConfig> {
    let store = store_for(root, alternate);
    let (config, warnings) =
        load_resolved(&store, root, overrides).map_err(NgtwError::from)?;
    report_warnings(&warnings, ui);
    Ok(config)
}

pub(crate) fn report_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }
    if ui.json {
        for warning in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "key": warning.key,
                "suggestion": warning.suggestion,
            }));
        }
        return;
    }
    eprint!(
        "{}",
        crate::ui::blocks::warning::render_config_warnings(warnings, ui.color, ui.unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_for_defaults_to_project_file() {
        let store = store_for(Path::new("/proj"), None);
        assert_eq!(store.path(), Path::new("/proj/ng-tailwind.toml"));
    }

    #[test]
    fn store_for_anchors_relative_alternate() {
        let store = store_for(Path::new("/proj"), Some(Path::new("./cfg/alt.toml")));
        assert_eq!(store.path(), Path::new("/proj/cfg/alt.toml"));
    }

    #[test]
    fn store_for_keeps_absolute_alternate() {
        let store = store_for(Path::new("/proj"), Some(Path::new("/etc/ngtw.toml")));
        assert_eq!(store.path(), Path::new("/etc/ngtw.toml"));
    }
}
