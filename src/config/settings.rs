//! Environment-driven settings
//!
//! Knobs that are not part of `ng-tailwind.toml`: engine command lines and
//! the watch debounce window. All come from `NGTW_*` variables.

use std::time::Duration;

/// Default debounce window in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

pub const ENV_DEBOUNCE_MS: &str = "NGTW_DEBOUNCE_MS";
pub const ENV_TAILWIND_CMD: &str = "NGTW_TAILWIND_CMD";
pub const ENV_SASS_CMD: &str = "NGTW_SASS_CMD";
pub const ENV_PURGECSS_CMD: &str = "NGTW_PURGECSS_CMD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub debounce: Duration,
    /// Full command prefix for the Tailwind CLI, e.g. `["npx", "tailwindcss"]`
    pub tailwind_cmd: Option<Vec<String>>,
    pub sass_cmd: Option<Vec<String>>,
    pub purgecss_cmd: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            tailwind_cmd: None,
            sass_cmd: None,
            purgecss_cmd: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = get_env(ENV_DEBOUNCE_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => settings.debounce = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {ENV_DEBOUNCE_MS}"),
            }
        }

        settings.tailwind_cmd = get_env(ENV_TAILWIND_CMD).and_then(|s| split_command(&s));
        settings.sass_cmd = get_env(ENV_SASS_CMD).and_then(|s| split_command(&s));
        settings.purgecss_cmd = get_env(ENV_PURGECSS_CMD).and_then(|s| split_command(&s));

        settings
    }
}

fn split_command(raw: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}
