//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on the domain ports, never on concrete engines
//! - Receives a `ResolvedConfig` explicitly; there is no global state
//! - Reports progress through return values and event callbacks
//!
//! ## Use Cases
//!
//! - `Builder` - One compilation of the source stylesheet
//! - `Purger` - One purge pass over the built output
//! - `BuildPipeline` - Build, then the automatic purge when enabled
//! - `ConfigureUseCase` - Resolve and persist `ng-tailwind.toml`
//! - `WatchUseCase` - Debounced rebuilds on file changes

pub mod build;
pub mod configure;
pub mod pipeline;
pub mod purge;
pub mod watch;

pub use build::{BuildOutcome, Builder};
pub use configure::{load_resolved, ConfigureResult, ConfigureUseCase};
pub use pipeline::{BuildPipeline, PipelineOutcome};
pub use purge::{PurgeOptions, PurgeReport, Purger};
pub use watch::{WatchEvent, WatchOptions, WatchSession, WatchState, WatchUseCase};
