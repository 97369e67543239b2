//! Test environment for isolated ngtw runs.
//!
//! Each `TestEnv` owns a temporary project directory and a separate tools
//! directory for fake engine scripts, so neither the content scan nor the
//! watcher ever sees them.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use tempfile::TempDir;

/// Engine and logging variables cleared for every run
const CLEARED_ENV: &[&str] = &[
    "NGTW_TAILWIND_CMD",
    "NGTW_SASS_CMD",
    "NGTW_PURGECSS_CMD",
    "NGTW_DEBOUNCE_MS",
    "NGTW_LOG",
];

/// Result of running an ngtw command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

pub struct TestEnv {
    /// Temporary directory for the project (the working directory of every run)
    pub project_root: TempDir,
    /// Temporary directory for fake engine scripts
    pub tools_dir: TempDir,
    env: Vec<(String, String)>,
    ngtw_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
            env: Vec::new(),
            ngtw_bin: PathBuf::from(env!("CARGO_BIN_EXE_ngtw")),
        }
    }

    /// Canonical project root, as the binary sees its working directory
    pub fn root(&self) -> PathBuf {
        std::fs::canonicalize(self.project_root.path()).expect("Failed to canonicalize root")
    }

    /// Get path relative to the canonical project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Set an environment variable for every subsequent run
    pub fn set_env(&mut self, key: &str, value: impl Into<String>) {
        self.env.push((key.to_string(), value.into()));
    }

    /// Run ngtw from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute ngtw");
        output_to_result(output)
    }

    /// Start ngtw from the project root with stdout piped
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn ngtw")
    }

    /// Like `spawn`, but as the leader of a new process group, the way a
    /// shell starts a foreground job
    #[cfg(unix)]
    pub fn spawn_group_leader(&self, args: &[&str]) -> Child {
        use std::os::unix::process::CommandExt;

        self.command(args)
            .process_group(0)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn ngtw")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.ngtw_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1");
        for key in CLEARED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_root.path().join(relative_path), content);
    }

    /// Read a project file, panicking with the path on failure
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let path = self.project_root.path().join(relative_path);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn project_file_exists(&self, relative_path: &str) -> bool {
        self.project_root.path().join(relative_path).exists()
    }

    /// Path of a file in the tools directory
    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.tools_dir.path().join(name)
    }

    /// Contents of the shared engine call log (empty when nothing ran)
    pub fn calls(&self) -> String {
        std::fs::read_to_string(self.tool_path("calls.log")).unwrap_or_default()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
