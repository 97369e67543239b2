//! Error types for ngtw
//!
//! Uses `thiserror` for library errors. Each stage (config, build, purge,
//! watch, scripts) has its own enum; `NgtwError` wraps them with a stage
//! prefix so every message tells the operator where things went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ngtw operations
pub type NgtwResult<T> = Result<T, NgtwError>;

/// Top-level error type, one variant per stage
#[derive(Error, Debug)]
pub enum NgtwError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("build: {0}")]
    Build(#[from] BuildError),

    #[error("purge: {0}")]
    Purge(#[from] PurgeError),

    #[error("watch: {0}")]
    Monitor(#[from] MonitorError),

    #[error("scripts: {0}")]
    Manifest(#[from] ManifestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration resolution and persistence errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--purge` and `--unset-purge` given together
    #[error("conflicting purge intent: --purge and --unset-purge were both given; make up your mind")]
    ConflictingPurgeIntent,

    /// Persisted file exists but cannot be parsed
    #[error("malformed configuration in {file}: {message}")]
    Malformed { file: PathBuf, message: String },

    /// Source and output resolve to the same file
    #[error("source and output stylesheet are the same file: {path}")]
    SameSourceAndOutput { path: PathBuf },

    /// Working directory could not be determined
    #[error("cannot determine working directory: {0}")]
    WorkingDir(std::io::Error),

    /// Reading or writing the persisted file failed
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure reported by an external engine (compile, preprocess, purge)
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine process could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and reported failure
    #[error("`{command}` failed: {details}")]
    Failed { command: String, details: String },

    /// The engine produced output we could not understand
    #[error("unexpected output from `{command}`: {message}")]
    BadOutput { command: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("source stylesheet not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("compilation failed: {details}")]
    CompilationFailed { details: String },

    #[error("cannot write output {path}: {message}")]
    OutputWriteFailed { path: PathBuf, message: String },
}

/// Errors from a purge pass
#[derive(Error, Debug)]
pub enum PurgeError {
    /// Nothing to purge: the output has not been built yet
    #[error("output stylesheet not found: {path} (run `ngtw build` first)")]
    OutputNotFound { path: PathBuf },

    #[error("content scan of {root} failed: {message}")]
    ScanFailed { root: PathBuf, message: String },

    #[error("{0}")]
    EngineFailed(EngineError),

    #[error("cannot write purged output {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a build-then-purge run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("build: {0}")]
    Build(#[from] BuildError),

    #[error("purge: {0}")]
    Purge(#[from] PurgeError),
}

impl PipelineError {
    /// Name of the stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Build(_) => "build",
            PipelineError::Purge(_) => "purge",
        }
    }

    /// The failure without the stage prefix
    pub fn detail(&self) -> String {
        match self {
            PipelineError::Build(e) => e.to_string(),
            PipelineError::Purge(e) => e.to_string(),
        }
    }
}

impl From<PipelineError> for NgtwError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Build(e) => NgtwError::Build(e),
            PipelineError::Purge(e) => NgtwError::Purge(e),
        }
    }
}

/// Filesystem monitor failures; always fatal to the watch loop
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("cannot watch {path}: {message}")]
    Subscribe { path: PathBuf, message: String },

    #[error("watched path removed: {path}")]
    TargetRemoved { path: PathBuf },

    #[error("file monitor failed: {message}")]
    Failed { message: String },

    #[error("file monitor disconnected")]
    Disconnected,
}

/// Errors while injecting scripts into `package.json`
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("package.json not found at {path}")]
    NotFound { path: PathBuf },

    #[error("invalid package.json at {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
