//! Child process invocation

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::EngineError;

use super::runner::PackageRunner;

/// A tool command prefix, e.g. `["npx", "--no-install", "tailwindcss"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    argv: Vec<String>,
}

impl ToolCommand {
    /// `argv` must contain at least the program name
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    /// Use `override_argv` when given, otherwise `tool` through `runner`
    pub fn resolve(override_argv: Option<&[String]>, runner: PackageRunner, tool: &str) -> Self {
        let argv = match override_argv {
            Some(argv) if !argv.is_empty() => argv.to_vec(),
            _ => runner.command_for(tool),
        };
        Self { argv }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Run with extra `args` in `cwd`, failing on a non-zero exit
    pub fn run(&self, args: &[OsString], cwd: &Path) -> Result<Output, EngineError> {
        let rendered = self.display_with(args);
        tracing::debug!(command = %rendered, cwd = %cwd.display(), "running engine");

        let mut command = Command::new(self.program());
        command.args(&self.argv[1..]).args(args).current_dir(cwd);
        detach_from_terminal_signals(&mut command);

        let output = command.output().map_err(|source| EngineError::Spawn {
            command: rendered.clone(),
            source,
        })?;

        if output.status.success() {
            return Ok(output);
        }
        Err(EngineError::Failed {
            command: rendered,
            details: summarize_command_failure(&output),
        })
    }

    fn display_with(&self, args: &[OsString]) -> String {
        self.argv
            .iter()
            .cloned()
            .chain(args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run the child in its own process group so a terminal Ctrl+C reaches
/// only ngtw, which lets the in-flight engine finish.
#[cfg(unix)]
fn detach_from_terminal_signals(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn detach_from_terminal_signals(_command: &mut Command) {}

/// Best human summary of a failed process: stderr, else stdout, else status
pub(crate) fn summarize_command_failure(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    format!("exit status {}", output.status)
}
