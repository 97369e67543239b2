//! Builder
//!
//! Runs the compile engine once for a resolved configuration.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::domain::ports::{CompileEngine, CompileRequest};
use crate::error::{BuildError, EngineError};

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
    pub output_path: PathBuf,
    pub duration_ms: u64,
}

/// Compiles the source stylesheet into the output stylesheet
pub struct Builder<C>
where
    C: CompileEngine,
{
    engine: C,
}

impl<C> Builder<C>
where
    C: CompileEngine,
{
    pub fn new(engine: C) -> Self {
        Self { engine }
    }

    /// Compile once, overwriting the output
    pub fn build(&self, config: &ResolvedConfig) -> Result<BuildOutcome, BuildError> {
        if !config.source_path.is_file() {
            return Err(BuildError::SourceNotFound {
                path: config.source_path.clone(),
            });
        }

        if let Some(parent) = config.output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::OutputWriteFailed {
                path: config.output_path.clone(),
                message: e.to_string(),
            })?;
        }

        let config_script = config
            .config_script_path
            .is_file()
            .then_some(config.config_script_path.as_path());
        if config_script.is_none() {
            tracing::debug!(
                path = %config.config_script_path.display(),
                "config script missing, building without it"
            );
        }

        let request = CompileRequest {
            project_root: &config.project_root,
            source: &config.source_path,
            output: &config.output_path,
            config_script,
            preprocess: config.preprocessor_enabled,
        };

        let started = Instant::now();
        self.engine.compile(&request).map_err(|e| match e {
            EngineError::Io(e) => BuildError::OutputWriteFailed {
                path: config.output_path.clone(),
                message: e.to_string(),
            },
            other => BuildError::CompilationFailed {
                details: other.to_string(),
            },
        })?;

        if !config.output_path.is_file() {
            return Err(BuildError::OutputWriteFailed {
                path: config.output_path.clone(),
                message: "engine reported success but wrote nothing".to_string(),
            });
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            output = %config.output_path.display(),
            duration_ms,
            "build complete"
        );
        Ok(BuildOutcome {
            output_path: config.output_path.clone(),
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, ConfigOverrides, DefaultConfig, PersistedConfig};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<(PathBuf, PathBuf, Option<PathBuf>, bool)>>,
        fail_with: Option<&'static str>,
    }

    impl CompileEngine for RecordingEngine {
        fn compile(&self, request: &CompileRequest<'_>) -> Result<(), EngineError> {
            self.calls.borrow_mut().push((
                request.source.to_path_buf(),
                request.output.to_path_buf(),
                request.config_script.map(Path::to_path_buf),
                request.preprocess,
            ));
            if let Some(details) = self.fail_with {
                return Err(EngineError::Failed {
                    command: "tailwindcss".to_string(),
                    details: details.to_string(),
                });
            }
            fs::write(request.output, "/* built */").map_err(EngineError::Io)
        }
    }

    fn project(overrides: ConfigOverrides) -> (tempfile::TempDir, ResolvedConfig) {
        let dir = tempdir().unwrap();
        let config = resolve(
            &overrides,
            &PersistedConfig::default(),
            &DefaultConfig::for_project(dir.path()),
        )
        .unwrap();
        (dir, config)
    }

    #[test]
    fn build_missing_source_fails_before_engine() {
        let (_dir, config) = project(ConfigOverrides::new());
        let engine = RecordingEngine::default();

        let err = Builder::new(&engine).build(&config).unwrap_err();

        assert!(matches!(err, BuildError::SourceNotFound { .. }));
        assert!(engine.calls.borrow().is_empty());
    }

    #[test]
    fn build_creates_output_dir_and_reports_outcome() {
        let (dir, config) = project(ConfigOverrides::new().with_output("dist/css/app.css"));
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(&config.source_path, "@tailwind base;").unwrap();
        let engine = RecordingEngine::default();

        let outcome = Builder::new(&engine).build(&config).unwrap();

        assert_eq!(outcome.output_path, dir.path().join("dist/css/app.css"));
        assert!(outcome.output_path.is_file());
        let calls = engine.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, config.source_path);
        // no tailwind.config.js in the project
        assert_eq!(calls[0].2, None);
        assert!(!calls[0].3);
    }

    #[test]
    fn build_passes_existing_config_script_and_preprocess() {
        let (dir, config) = project(ConfigOverrides::new().with_preprocessor(true));
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(&config.source_path, "").unwrap();
        fs::write(&config.config_script_path, "module.exports = {}").unwrap();
        let engine = RecordingEngine::default();

        Builder::new(&engine).build(&config).unwrap();

        let calls = engine.calls.borrow();
        assert_eq!(calls[0].2.as_deref(), Some(config.config_script_path.as_path()));
        assert!(calls[0].3);
    }

    #[test]
    fn build_engine_failure_is_compilation_failed() {
        let (dir, config) = project(ConfigOverrides::new());
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(&config.source_path, "").unwrap();
        let engine = RecordingEngine {
            fail_with: Some("Unknown word"),
            ..Default::default()
        };

        let err = Builder::new(&engine).build(&config).unwrap_err();

        match err {
            BuildError::CompilationFailed { details } => assert!(details.contains("Unknown word")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
