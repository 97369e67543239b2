//! Compile Engine Port
//!
//! Turns a source stylesheet into the compiled output stylesheet.

use std::path::Path;

use crate::error::EngineError;

/// One compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileRequest<'a> {
    pub project_root: &'a Path,
    pub source: &'a Path,
    pub output: &'a Path,
    /// Framework config script; `None` when the file does not exist
    pub config_script: Option<&'a Path>,
    /// Route the source through the preprocessor stage first
    pub preprocess: bool,
}

pub trait CompileEngine {
    /// Compile `request.source` into `request.output`, overwriting it
    fn compile(&self, request: &CompileRequest<'_>) -> Result<(), EngineError>;
}

impl<T: CompileEngine + ?Sized> CompileEngine for &T {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<(), EngineError> {
        (**self).compile(request)
    }
}
