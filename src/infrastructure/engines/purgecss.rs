//! PurgeCSS CLI purge engine

use std::ffi::OsString;
use std::path::Path;

use serde::Deserialize;

use crate::config::Settings;
use crate::domain::ports::{PurgeEngine, PurgeRequest, PurgedCss};
use crate::error::EngineError;

use super::process::ToolCommand;
use super::runner::PackageRunner;

/// Runs `purgecss` and reads its JSON result from stdout
#[derive(Debug, Clone)]
pub struct PurgeCssCli {
    command: ToolCommand,
}

/// One entry of the JSON array `purgecss` prints without `--output`
#[derive(Debug, Deserialize)]
struct PurgeCssResult {
    css: String,
    #[serde(default)]
    rejected: Vec<String>,
}

impl PurgeCssCli {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }

    pub fn from_settings(settings: &Settings, project_root: &Path) -> Self {
        let runner = PackageRunner::detect(project_root);
        Self::new(ToolCommand::resolve(
            settings.purgecss_cmd.as_deref(),
            runner,
            "purgecss",
        ))
    }

    fn args(request: &PurgeRequest<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--css".into(), request.stylesheet.as_os_str().to_owned()];
        args.push("--content".into());
        args.extend(request.content.iter().map(|p| p.as_os_str().to_owned()));
        if request.keyframes {
            args.push("--keyframes".into());
        }
        if request.font_face {
            args.push("--font-face".into());
        }
        // Always asked for: the report counts removed selectors
        args.push("--rejected".into());
        args
    }
}

impl PurgeEngine for PurgeCssCli {
    fn purge(&self, request: &PurgeRequest<'_>) -> Result<PurgedCss, EngineError> {
        let output = self.command.run(&Self::args(request), request.project_root)?;
        parse_output(&output.stdout).map_err(|message| EngineError::BadOutput {
            command: self.command.program().to_string(),
            message,
        })
    }
}

fn parse_output(stdout: &[u8]) -> Result<PurgedCss, String> {
    let results: Vec<PurgeCssResult> =
        serde_json::from_slice(stdout).map_err(|e| format!("expected JSON array: {e}"))?;
    if results.is_empty() {
        return Err("no stylesheet in result".to_string());
    }

    let mut purged = PurgedCss::default();
    for result in results {
        purged.css.push_str(&result.css);
        purged.rejected.extend(result.rejected);
    }
    Ok(purged)
}
