//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::pipeline::BuildPipeline;
use crate::config::paths::display_relative;
use crate::config::ResolvedConfig;
use crate::domain::ports::{CompileEngine, FileMonitor, MonitorMessage, PurgeEngine, WatchTarget};
use crate::error::MonitorError;

use super::cache::ContentHashes;
use super::event::{WatchEvent, WatchOptions};
use super::session::WatchSession;

/// Upper bound on one channel wait, so stop requests are noticed quickly
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Extensions that count as stylesheets under the source directory
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "scss", "sass", "pcss", "less"];

/// Watch Use Case
///
/// Orchestrates the rebuild loop behind `ngtw watch`.
pub struct WatchUseCase<C, P, M>
where
    C: CompileEngine,
    P: PurgeEngine,
    M: FileMonitor,
{
    pipeline: BuildPipeline<C, P>,
    monitor: M,
    options: WatchOptions,
}

impl<C, P, M> WatchUseCase<C, P, M>
where
    C: CompileEngine,
    P: PurgeEngine,
    M: FileMonitor,
{
    pub fn new(pipeline: BuildPipeline<C, P>, monitor: M, options: WatchOptions) -> Self {
        Self {
            pipeline,
            monitor,
            options,
        }
    }

    /// Start watching (blocking)
    ///
    /// Returns `Ok` once `running` is cleared, or the monitor error that
    /// ended the session. Build and purge failures are reported through
    /// `on_event` and never end the session.
    pub fn start<F>(
        &mut self,
        config: &ResolvedConfig,
        running: Arc<AtomicBool>,
        on_event: F,
    ) -> Result<(), MonitorError>
    where
        F: Fn(WatchEvent),
    {
        let filter = ChangeFilter::new(config);
        let targets = watch_targets(config);
        let rx = self.monitor.watch(&targets)?;

        on_event(WatchEvent::WatchStarted {
            source: display_relative(&config.project_root, &config.source_path),
            watching: targets
                .iter()
                .map(|t| display_relative(&config.project_root, &t.path))
                .collect(),
        });

        let mut hashes = ContentHashes::new();
        hashes.seed(&config.source_path);
        hashes.seed(&config.config_script_path);

        let mut session = WatchSession::new(config.clone(), self.options.debounce);
        let mut ctx = LoopContext {
            session: &mut session,
            filter: &filter,
            hashes: &mut hashes,
            on_event: &on_event,
        };

        let result = self.run_loop(&mut ctx, &rx, &running);

        let discarded = session.stop();
        self.monitor.unwatch();
        if let Err(err) = &result {
            on_event(WatchEvent::Error {
                stage: "watch".to_string(),
                message: err.to_string(),
            });
        }
        on_event(WatchEvent::Shutdown { discarded });
        result
    }

    fn run_loop<F>(
        &self,
        ctx: &mut LoopContext<'_, F>,
        rx: &Receiver<MonitorMessage>,
        running: &AtomicBool,
    ) -> Result<(), MonitorError>
    where
        F: Fn(WatchEvent),
    {
        if self.options.initial_build && running.load(Ordering::SeqCst) {
            ctx.session.begin_rebuild();
            self.rebuild(ctx, &[], rx)?;
        }

        while running.load(Ordering::SeqCst) {
            let wait = ctx
                .session
                .deadline()
                .map(|d| d.saturating_duration_since(Instant::now()))
                .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));

            match rx.recv_timeout(wait) {
                Ok(message) => ctx.handle(message)?,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Err(MonitorError::Disconnected),
            }

            if !running.load(Ordering::SeqCst) {
                break;
            }
            if let Some(batch) = ctx.session.poll(Instant::now()) {
                self.rebuild(ctx, &batch, rx)?;
            }
        }
        Ok(())
    }

    fn rebuild<F>(
        &self,
        ctx: &mut LoopContext<'_, F>,
        changes: &[PathBuf],
        rx: &Receiver<MonitorMessage>,
    ) -> Result<(), MonitorError>
    where
        F: Fn(WatchEvent),
    {
        let root = ctx.session.config().project_root.clone();
        for path in changes {
            (ctx.on_event)(WatchEvent::FileChanged {
                path: display_relative(&root, path),
            });
        }
        (ctx.on_event)(WatchEvent::BuildStarted {
            changes: changes.len(),
        });

        let result = self.pipeline.run(ctx.session.config());

        // Whatever arrived while building becomes the follow-up batch.
        while let Ok(message) = rx.try_recv() {
            ctx.handle(message)?;
        }

        match result {
            Ok(outcome) => {
                ctx.session.finish_rebuild(true);
                (ctx.on_event)(WatchEvent::BuildComplete {
                    output: display_relative(&root, &outcome.build.output_path),
                    duration_ms: outcome.build.duration_ms,
                    purged: outcome.purge.is_some(),
                    rejected: outcome.purge.map_or(0, |p| p.rejected.len()),
                });
            }
            Err(err) => {
                ctx.session.finish_rebuild(false);
                tracing::warn!(stage = err.stage(), error = %err.detail(), "rebuild failed");
                (ctx.on_event)(WatchEvent::Error {
                    stage: err.stage().to_string(),
                    message: err.detail(),
                });
            }
        }
        ctx.session.settle(Instant::now());
        Ok(())
    }
}

struct LoopContext<'a, F> {
    session: &'a mut WatchSession,
    filter: &'a ChangeFilter,
    hashes: &'a mut ContentHashes,
    on_event: &'a F,
}

impl<F> LoopContext<'_, F>
where
    F: Fn(WatchEvent),
{
    fn handle(&mut self, message: MonitorMessage) -> Result<(), MonitorError> {
        let change = match message {
            MonitorMessage::Change(change) => change,
            MonitorMessage::Failed(err) => return Err(err),
        };
        if !self.filter.is_relevant(&change.path) {
            return Ok(());
        }
        if !self.hashes.changed(&change.path) {
            tracing::trace!(path = %change.path.display(), "content unchanged, skipping");
            return Ok(());
        }
        tracing::debug!(path = %change.path.display(), kind = ?change.kind, "change recorded");
        self.session.record_change(change.path, Instant::now());
        Ok(())
    }
}

/// Directories to subscribe to: the source stylesheet's directory tree,
/// plus the config script's directory when it lies outside that tree
pub(super) fn watch_targets(config: &ResolvedConfig) -> Vec<WatchTarget> {
    let source_dir = parent_or_root(&config.source_path, &config.project_root);
    let script_dir = parent_or_root(&config.config_script_path, &config.project_root);

    let mut targets = vec![WatchTarget::recursive(source_dir.clone())];
    if !script_dir.starts_with(&source_dir) && script_dir.is_dir() {
        targets.push(WatchTarget::shallow(script_dir));
    }
    targets
}

fn parent_or_root(path: &Path, root: &Path) -> PathBuf {
    path.parent().unwrap_or(root).to_path_buf()
}

/// Decides which paths can affect the build
///
/// Each path is kept both as configured and canonicalized, since some
/// platforms report events under the canonical path.
#[derive(Debug)]
pub(super) struct ChangeFilter {
    source_dirs: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
    scripts: Vec<PathBuf>,
}

impl ChangeFilter {
    pub(super) fn new(config: &ResolvedConfig) -> Self {
        let source_dir = parent_or_root(&config.source_path, &config.project_root);
        Self {
            source_dirs: path_forms(&source_dir),
            outputs: path_forms(&config.output_path),
            scripts: path_forms(&config.config_script_path),
        }
    }

    pub(super) fn is_relevant(&self, path: &Path) -> bool {
        if self.outputs.iter().any(|p| p == path) {
            return false;
        }
        if self.scripts.iter().any(|p| p == path) {
            return true;
        }
        let is_stylesheet = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| STYLESHEET_EXTENSIONS.contains(&ext));
        is_stylesheet && self.source_dirs.iter().any(|dir| path.starts_with(dir))
    }
}

fn path_forms(path: &Path) -> Vec<PathBuf> {
    let mut forms = vec![path.to_path_buf()];
    let canonical = path.canonicalize().ok().or_else(|| {
        let parent = path.parent()?.canonicalize().ok()?;
        Some(parent.join(path.file_name()?))
    });
    if let Some(canonical) = canonical {
        if canonical != path {
            forms.push(canonical);
        }
    }
    forms
}
