//! Configuration module for ngtw
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NGTW_*), for engine and watch settings
//! 3. Project config (`ng-tailwind.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! Resolution happens once per invocation; the resulting `ResolvedConfig`
//! is immutable. Changes written by `configure` only reach a running
//! `watch` after it is restarted.

pub mod paths;
mod resolver;
mod settings;
mod store;
mod types;

pub use resolver::resolve;
pub use settings::{
    Settings, DEBOUNCE_MS, ENV_DEBOUNCE_MS, ENV_PURGECSS_CMD, ENV_SASS_CMD, ENV_TAILWIND_CMD,
};
pub use store::{ConfigStore, ConfigWarning, LoadedConfig, StagedConfig};
pub use types::{
    ConfigOverrides, DefaultConfig, PersistedConfig, ResolvedConfig, CONFIG_FILE_NAME,
    DEFAULT_CONFIG_SCRIPT, DEFAULT_OUTPUT, DEFAULT_SOURCE,
};
