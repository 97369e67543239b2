//! Purge Engine Port
//!
//! Removes selectors that never appear in the project's content files.
//! The engine only computes the purged stylesheet; writing it back is the
//! caller's job.

use std::path::{Path, PathBuf};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeRequest<'a> {
    pub project_root: &'a Path,
    pub stylesheet: &'a Path,
    pub content: &'a [PathBuf],
    pub keyframes: bool,
    pub font_face: bool,
}

/// Engine result: the new stylesheet and what was removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgedCss {
    pub css: String,
    pub rejected: Vec<String>,
}

pub trait PurgeEngine {
    fn purge(&self, request: &PurgeRequest<'_>) -> Result<PurgedCss, EngineError>;
}

impl<T: PurgeEngine + ?Sized> PurgeEngine for &T {
    fn purge(&self, request: &PurgeRequest<'_>) -> Result<PurgedCss, EngineError> {
        (**self).purge(request)
    }
}
