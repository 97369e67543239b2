//! Configuration loading and persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ConfigError;

use super::paths::normalize;
use super::types::{PersistedConfig, ResolvedConfig, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Persisted configuration plus any warnings found while reading it
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: PersistedConfig,
    pub warnings: Vec<ConfigWarning>,
    /// Whether the file existed at all
    pub found: bool,
}

/// Reads and writes `ng-tailwind.toml`
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at an explicit path (`--config <path>`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: normalize(&path.into()),
        }
    }

    /// Store at the well-known location in `project_root`
    pub fn in_project(project_root: &Path) -> Self {
        Self::new(project_root.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted configuration.
    ///
    /// A missing file is not an error: it yields an empty configuration so
    /// every field falls back to the defaults. Relative paths inside the file
    /// are anchored at the file's directory.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no persisted configuration");
                return Ok(LoadedConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let (config, warnings) = parse_with_warnings(&content, &self.path)?;
        let base = self.path.parent().unwrap_or(Path::new("/"));
        Ok(LoadedConfig {
            config: config.anchored_at(base),
            warnings,
            found: true,
        })
    }

    /// Atomically replace the persisted file with `config`.
    pub fn persist(&self, config: &ResolvedConfig) -> Result<(), ConfigError> {
        self.stage(config)?.commit()
    }

    /// Write `config` to a temporary file next to the target without
    /// replacing it yet. Dropping the returned value discards the write.
    pub fn stage(&self, config: &ResolvedConfig) -> Result<StagedConfig, ConfigError> {
        let body = toml::to_string_pretty(&PersistedConfig::from(config)).map_err(|e| {
            ConfigError::Malformed {
                file: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        let dir = self.path.parent().unwrap_or(Path::new("."));
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        temp.write_all(body.as_bytes()).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;

        Ok(StagedConfig {
            temp,
            target: self.path.clone(),
        })
    }
}

/// A fully written configuration waiting to be renamed into place
#[derive(Debug)]
pub struct StagedConfig {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedConfig {
    /// Rename the staged file over the target
    pub fn commit(self) -> Result<(), ConfigError> {
        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| ConfigError::Io {
                path: target.clone(),
                source: e.error,
            })?;
        tracing::debug!(path = %target.display(), "configuration persisted");
        Ok(())
    }
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(PersistedConfig, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: PersistedConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Malformed {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["configJS", "sourceCSS", "outputCSS", "purge", "sass"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown.to_lowercase(), &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
