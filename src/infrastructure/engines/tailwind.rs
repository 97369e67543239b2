//! Tailwind CLI compile engine, with an optional Sass stage

use std::ffi::OsString;
use std::path::Path;

use crate::config::Settings;
use crate::domain::ports::{CompileEngine, CompileRequest};
use crate::error::EngineError;

use super::process::ToolCommand;
use super::runner::PackageRunner;

/// Compiles stylesheets with `tailwindcss`, preprocessing with `sass` when asked
#[derive(Debug, Clone)]
pub struct TailwindCli {
    tailwind: ToolCommand,
    sass: ToolCommand,
}

impl TailwindCli {
    pub fn new(tailwind: ToolCommand, sass: ToolCommand) -> Self {
        Self { tailwind, sass }
    }

    /// Engine commands from `NGTW_*_CMD`, falling back to the project's runner
    pub fn from_settings(settings: &Settings, project_root: &Path) -> Self {
        let runner = PackageRunner::detect(project_root);
        Self::new(
            ToolCommand::resolve(settings.tailwind_cmd.as_deref(), runner, "tailwindcss"),
            ToolCommand::resolve(settings.sass_cmd.as_deref(), runner, "sass"),
        )
    }

    fn run_tailwind(&self, input: &Path, request: &CompileRequest<'_>) -> Result<(), EngineError> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            input.as_os_str().to_owned(),
            "-o".into(),
            request.output.as_os_str().to_owned(),
        ];
        if let Some(script) = request.config_script {
            args.push("-c".into());
            args.push(script.as_os_str().to_owned());
        }
        self.tailwind.run(&args, request.project_root)?;
        Ok(())
    }
}

impl CompileEngine for TailwindCli {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<(), EngineError> {
        if !request.preprocess {
            return self.run_tailwind(request.source, request);
        }

        // No extension, so the watcher never mistakes it for a stylesheet.
        let dir = request.output.parent().unwrap_or(request.project_root);
        let intermediate = tempfile::Builder::new()
            .prefix(".ngtw-sass-")
            .tempfile_in(dir)?;

        let args: Vec<OsString> = vec![
            request.source.as_os_str().to_owned(),
            intermediate.path().as_os_str().to_owned(),
            "--no-source-map".into(),
        ];
        self.sass.run(&args, request.project_root)?;
        tracing::debug!(path = %intermediate.path().display(), "sass stage done");

        self.run_tailwind(intermediate.path(), request)
    }
}
