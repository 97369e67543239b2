//! Package runner detection

use std::path::Path;

/// How node tools are launched in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageRunner {
    #[default]
    Npx,
    Pnpm,
    Yarn,
    Bunx,
}

impl PackageRunner {
    /// Pick the runner from the lockfile present in `project_root`
    pub fn detect(project_root: &Path) -> Self {
        const LOCKFILES: &[(&str, PackageRunner)] = &[
            ("pnpm-lock.yaml", PackageRunner::Pnpm),
            ("yarn.lock", PackageRunner::Yarn),
            ("bun.lockb", PackageRunner::Bunx),
            ("bun.lock", PackageRunner::Bunx),
        ];

        LOCKFILES
            .iter()
            .find(|(file, _)| project_root.join(file).is_file())
            .map(|(_, runner)| *runner)
            .unwrap_or_default()
    }

    /// Command prefix that runs `tool` through this runner
    pub fn command_for(&self, tool: &str) -> Vec<String> {
        let prefix: &[&str] = match self {
            PackageRunner::Npx => &["npx", "--no-install"],
            PackageRunner::Pnpm => &["pnpm", "exec"],
            PackageRunner::Yarn => &["yarn"],
            PackageRunner::Bunx => &["bunx"],
        };
        prefix
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once(tool.to_string()))
            .collect()
    }
}
