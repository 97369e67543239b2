//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic writes, content hashing, content scanning
//! - `engines/` - Child-process engines (Tailwind CLI, Sass, PurgeCSS)
//! - `monitor` - `notify`-backed file monitor
//! - `manifest` - `package.json` script injection

pub mod engines;
pub mod fs;
pub mod manifest;
pub mod monitor;

// Re-export for convenience
pub use engines::{PackageRunner, PurgeCssCli, TailwindCli};
pub use fs::{atomic_write, hash_content, scan_content};
pub use manifest::PackageJsonInjector;
pub use monitor::NotifyMonitor;
