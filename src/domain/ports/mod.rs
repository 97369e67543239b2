//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_engine;
pub mod file_monitor;
pub mod manifest_injector;
pub mod purge_engine;

pub use compile_engine::{CompileEngine, CompileRequest};
pub use file_monitor::{ChangeEvent, ChangeKind, FileMonitor, MonitorMessage, WatchTarget};
pub use manifest_injector::{ManifestInjector, ScriptChange, ScriptsReport};
pub use purge_engine::{PurgeEngine, PurgeRequest, PurgedCss};
