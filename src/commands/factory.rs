//! Use case factory
//!
//! Wires the use cases to their child-process engines and the `notify`
//! monitor. Engine command lines come from `NGTW_*_CMD` or the project's
//! package runner.

use std::path::Path;

use ngtw::application::{BuildPipeline, Purger, WatchOptions, WatchUseCase};
use ngtw::config::Settings;
use ngtw::infrastructure::{NotifyMonitor, PurgeCssCli, TailwindCli};

pub type ConcretePipeline = BuildPipeline<TailwindCli, PurgeCssCli>;

pub type ConcreteWatchUseCase = WatchUseCase<TailwindCli, PurgeCssCli, NotifyMonitor>;

pub fn create_pipeline(project_root: &Path, settings: &Settings) -> ConcretePipeline {
    BuildPipeline::new(
        TailwindCli::from_settings(settings, project_root),
        PurgeCssCli::from_settings(settings, project_root),
    )
}

pub fn create_purger(project_root: &Path, settings: &Settings) -> Purger<PurgeCssCli> {
    Purger::new(PurgeCssCli::from_settings(settings, project_root))
}

pub fn create_watch_use_case(project_root: &Path, settings: &Settings) -> ConcreteWatchUseCase {
    WatchUseCase::new(
        create_pipeline(project_root, settings),
        NotifyMonitor::new(),
        WatchOptions::default().with_debounce(settings.debounce),
    )
}
