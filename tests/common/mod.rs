//! Common test utilities for ngtw CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run `ngtw`
//! - Fake engines: shell scripts standing in for tailwindcss, sass and purgecss
//! - Fixtures: Reusable file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
