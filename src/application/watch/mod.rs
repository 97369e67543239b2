//! Watch Use Case
//!
//! Continuous rebuilds for `ngtw watch`:
//! - File system monitoring through the `FileMonitor` port
//! - Debouncing (100ms default, `NGTW_DEBOUNCE_MS`)
//! - Content-hash filtering of editor save noise
//! - Build pipeline runs that never overlap, with failures isolated
//!
//! ## Architecture
//!
//! - `WatchSession` - Explicit state machine, driven with caller-supplied instants
//! - `WatchUseCase` - Owns the monitor channel and feeds the session
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let mut use_case = WatchUseCase::new(pipeline, NotifyMonitor::new(), WatchOptions::default());
//! use_case.start(&config, running, |event| { ... })?;
//! ```

mod cache;
mod event;
mod session;
mod use_case;


pub use cache::ContentHashes;
pub use event::{WatchEvent, WatchOptions};
pub use session::{WatchSession, WatchState};
pub use use_case::{WatchUseCase, STYLESHEET_EXTENSIONS};
