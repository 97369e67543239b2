//! Watch event types and options

use std::time::Duration;

use serde::Serialize;

use crate::config::DEBOUNCE_MS;

/// Watch options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Quiet period after the last change before rebuilding
    pub debounce: Duration,
    /// Build once before waiting for changes
    pub initial_build: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            initial_build: true,
        }
    }
}

impl WatchOptions {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_initial_build(mut self, initial_build: bool) -> Self {
        self.initial_build = initial_build;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        source: String,
        watching: Vec<String>,
    },
    /// A relevant file changed (reported once per debounced batch)
    FileChanged { path: String },
    /// Build pipeline started; `changes` is 0 for the initial build
    BuildStarted { changes: usize },
    BuildComplete {
        output: String,
        duration_ms: u64,
        purged: bool,
        rejected: usize,
    },
    /// A build or purge failed; the watcher keeps going unless `stage` is `watch`
    Error { stage: String, message: String },
    /// Watch stopped; `discarded` pending changes were never built
    Shutdown { discarded: usize },
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
