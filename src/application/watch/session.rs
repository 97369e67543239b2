//! Watch session state machine
//!
//! ```text
//! Idle -> ChangeDetected -> Debouncing -> Rebuilding -> Idle
//!                                          Rebuilding -> Failed -> Idle
//! any -> Stopped
//! ```
//!
//! The session never looks at a clock itself: every transition that
//! depends on time takes `now` from the caller.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchState {
    Idle,
    ChangeDetected,
    Debouncing,
    Rebuilding,
    Failed,
    Stopped,
}

/// One `watch` invocation
#[derive(Debug)]
pub struct WatchSession {
    config: ResolvedConfig,
    debounce: Duration,
    state: WatchState,
    pending: BTreeSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatchSession {
    pub fn new(config: ResolvedConfig, debounce: Duration) -> Self {
        Self {
            config,
            debounce,
            state: WatchState::Idle,
            pending: BTreeSet::new(),
            last_change: None,
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Changes recorded but not yet handed to a rebuild
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// A relevant change arrived at `now`
    pub fn record_change(&mut self, path: PathBuf, now: Instant) {
        self.state = match self.state {
            WatchState::Stopped => return,
            WatchState::Idle | WatchState::Failed => WatchState::ChangeDetected,
            WatchState::ChangeDetected | WatchState::Debouncing => WatchState::Debouncing,
            // Picked up by `settle` once the current build is done.
            WatchState::Rebuilding => WatchState::Rebuilding,
        };
        self.pending.insert(path);
        self.last_change = Some(now);
    }

    /// When the debounce window closes, if one is open
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            WatchState::ChangeDetected | WatchState::Debouncing => {
                self.last_change.map(|at| at + self.debounce)
            }
            _ => None,
        }
    }

    /// Advance timers; returns the batch to rebuild once the window has
    /// elapsed with no further events
    pub fn poll(&mut self, now: Instant) -> Option<Vec<PathBuf>> {
        if self.state == WatchState::ChangeDetected {
            self.state = WatchState::Debouncing;
        }
        if self.state != WatchState::Debouncing {
            return None;
        }
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.state = WatchState::Rebuilding;
        self.last_change = None;
        Some(std::mem::take(&mut self.pending).into_iter().collect())
    }

    /// Enter `Rebuilding` without pending changes (initial build)
    pub fn begin_rebuild(&mut self) {
        if self.state != WatchState::Stopped {
            self.state = WatchState::Rebuilding;
        }
    }

    /// The in-flight build finished
    pub fn finish_rebuild(&mut self, ok: bool) {
        if self.state == WatchState::Rebuilding {
            self.state = if ok {
                WatchState::Idle
            } else {
                WatchState::Failed
            };
        }
    }

    /// Leave `Failed`, and schedule the follow-up rebuild for changes that
    /// arrived mid-build
    pub fn settle(&mut self, now: Instant) {
        if self.state == WatchState::Failed {
            self.state = WatchState::Idle;
        }
        if self.state == WatchState::Idle && !self.pending.is_empty() {
            self.state = WatchState::Debouncing;
            self.last_change.get_or_insert(now);
        }
    }

    /// Stop; returns how many pending changes were discarded
    pub fn stop(&mut self) -> usize {
        self.state = WatchState::Stopped;
        self.last_change = None;
        let discarded = self.pending.len();
        self.pending.clear();
        discarded
    }
}
