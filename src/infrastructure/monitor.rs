//! `notify`-backed file monitor

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{ChangeEvent, ChangeKind, FileMonitor, MonitorMessage, WatchTarget};
use crate::error::MonitorError;

/// Forwards `notify` events over a channel
///
/// The callback runs on notify's thread and only sends; all decisions are
/// made by whoever owns the receiver.
#[derive(Default)]
pub struct NotifyMonitor {
    watcher: Option<RecommendedWatcher>,
}

impl NotifyMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileMonitor for NotifyMonitor {
    fn watch(&mut self, targets: &[WatchTarget]) -> Result<Receiver<MonitorMessage>, MonitorError> {
        let (tx, rx) = channel();
        let roots: Vec<PathBuf> = targets
            .iter()
            .filter(|t| t.recursive)
            .map(|t| t.path.clone())
            .collect();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| forward(&tx, &roots, res),
            Config::default(),
        )
        .map_err(|e| MonitorError::Failed {
            message: e.to_string(),
        })?;

        for target in targets {
            let mode = if target.recursive {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher
                .watch(&target.path, mode)
                .map_err(|e| MonitorError::Subscribe {
                    path: target.path.clone(),
                    message: e.to_string(),
                })?;
            tracing::debug!(path = %target.path.display(), recursive = target.recursive, "watching");
        }

        self.watcher = Some(watcher);
        Ok(rx)
    }

    fn unwatch(&mut self) {
        // Dropping the watcher drops the sender inside its callback.
        self.watcher = None;
    }
}

fn forward(tx: &Sender<MonitorMessage>, roots: &[PathBuf], res: Result<Event, notify::Error>) {
    let event = match res {
        Ok(event) => event,
        Err(err) => {
            if is_fatal(&err) {
                let _ = tx.send(MonitorMessage::Failed(MonitorError::Failed {
                    message: err.to_string(),
                }));
            } else {
                tracing::warn!(error = %err, "file monitor error");
            }
            return;
        }
    };

    let Some(kind) = change_kind(&event.kind) else {
        return;
    };

    for path in event.paths {
        let message = if kind == ChangeKind::Removed && roots.contains(&path) {
            MonitorMessage::Failed(MonitorError::TargetRemoved { path })
        } else {
            MonitorMessage::Change(ChangeEvent::new(path, kind))
        };
        if tx.send(message).is_err() {
            return;
        }
    }
}

fn change_kind(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Access(_) => None,
        EventKind::Create(_) => Some(ChangeKind::Created),
        EventKind::Modify(_) => Some(ChangeKind::Modified),
        EventKind::Remove(_) => Some(ChangeKind::Removed),
        EventKind::Any | EventKind::Other => Some(ChangeKind::Other),
    }
}

fn is_fatal(err: &notify::Error) -> bool {
    matches!(
        err.kind,
        notify::ErrorKind::PathNotFound
            | notify::ErrorKind::WatchNotFound
            | notify::ErrorKind::MaxFilesWatch
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    #[test]
    fn change_kind_skips_access() {
        assert_eq!(change_kind(&EventKind::Access(AccessKind::Any)), None);
        assert_eq!(
            change_kind(&EventKind::Create(CreateKind::File)),
            Some(ChangeKind::Created)
        );
        assert_eq!(
            change_kind(&EventKind::Modify(ModifyKind::Any)),
            Some(ChangeKind::Modified)
        );
    }

    #[test]
    fn forward_turns_root_removal_into_failure() {
        let (tx, rx) = channel();
        let root = PathBuf::from("/proj/src");
        let event = Event::new(EventKind::Remove(RemoveKind::Folder)).add_path(root.clone());

        forward(&tx, std::slice::from_ref(&root), Ok(event));

        match rx.try_recv().unwrap() {
            MonitorMessage::Failed(MonitorError::TargetRemoved { path }) => assert_eq!(path, root),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn forward_passes_file_removal_as_change() {
        let (tx, rx) = channel();
        let event = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("/proj/src/old.css"));

        forward(&tx, &[PathBuf::from("/proj/src")], Ok(event));

        match rx.try_recv().unwrap() {
            MonitorMessage::Change(change) => assert_eq!(change.kind, ChangeKind::Removed),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn forward_fatal_errors_only() {
        let (tx, rx) = channel();
        forward(&tx, &[], Err(notify::Error::generic("transient")));
        assert!(rx.try_recv().is_err());

        forward(&tx, &[], Err(notify::Error::path_not_found()));
        assert!(matches!(rx.try_recv().unwrap(), MonitorMessage::Failed(_)));
    }

    #[test]
    fn watch_reports_file_writes() {
        let dir = tempdir().unwrap();
        let mut monitor = NotifyMonitor::new();
        let rx = monitor
            .watch(&[WatchTarget::recursive(dir.path())])
            .unwrap();

        let file = dir.path().join("app.css");
        fs::write(&file, ".a {}").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = false;
        while Instant::now() < deadline {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(MonitorMessage::Change(change)) if change.path.ends_with("app.css") => {
                    seen = true;
                    break;
                }
                _ => continue,
            }
        }
        monitor.unwatch();
        assert!(seen, "no change event for {}", file.display());
    }

    #[test]
    fn watch_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut monitor = NotifyMonitor::new();
        let err = monitor
            .watch(&[WatchTarget::recursive(dir.path().join("missing"))])
            .unwrap_err();
        assert!(matches!(err, MonitorError::Subscribe { .. }));
    }
}
