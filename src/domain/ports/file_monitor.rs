//! File Monitor Port
//!
//! A subscription to filesystem changes, delivered as messages on a
//! channel. The watcher consumes the channel on a single thread.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::error::MonitorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn modified(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Modified)
    }
}

/// A directory to watch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub path: PathBuf,
    pub recursive: bool,
}

impl WatchTarget {
    pub fn recursive(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: true,
        }
    }

    pub fn shallow(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
        }
    }
}

/// What a monitor delivers
#[derive(Debug)]
pub enum MonitorMessage {
    Change(ChangeEvent),
    /// The monitor cannot continue (e.g. watched directory deleted)
    Failed(MonitorError),
}

pub trait FileMonitor {
    /// Start watching `targets`
    fn watch(&mut self, targets: &[WatchTarget]) -> Result<Receiver<MonitorMessage>, MonitorError>;

    /// Stop watching; the receiver disconnects afterwards
    fn unwatch(&mut self);
}
