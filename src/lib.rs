//! ngtw - Tailwind CSS helper for Angular projects
//!
//! Resolves a small persisted configuration, drives the Tailwind CLI (with
//! an optional Sass pass) to build one output stylesheet, purges unused
//! selectors with PurgeCSS and rebuilds on change in watch mode.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildPipeline, Builder, ConfigureUseCase, Purger, WatchUseCase};
pub use config::{ConfigOverrides, ConfigStore, ResolvedConfig, Settings};
pub use error::{NgtwError, NgtwResult};
