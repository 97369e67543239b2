//! Purger
//!
//! Removes unused selectors from the built output, in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::domain::ports::{PurgeEngine, PurgeRequest};
use crate::error::PurgeError;
use crate::infrastructure::fs::{atomic_write, scan_content};

/// Options for one purge pass
///
/// The automatic purge after a build always uses `PurgeOptions::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeOptions {
    pub remove_unused_keyframes: bool,
    pub remove_unused_font_face: bool,
    /// List the removed selectors in the human report. The report always
    /// carries them
    pub print_rejected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    pub output_path: PathBuf,
    pub rejected: Vec<String>,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

pub struct Purger<P>
where
    P: PurgeEngine,
{
    engine: P,
}

impl<P> Purger<P>
where
    P: PurgeEngine,
{
    pub fn new(engine: P) -> Self {
        Self { engine }
    }

    pub fn purge(
        &self,
        config: &ResolvedConfig,
        options: &PurgeOptions,
    ) -> Result<PurgeReport, PurgeError> {
        let output = &config.output_path;
        let bytes_before = match fs::metadata(output) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => return Err(PurgeError::OutputNotFound { path: output.clone() }),
        };

        let root = content_root(&config.project_root);
        let content = scan_content(&root).map_err(|e| PurgeError::ScanFailed {
            root: root.clone(),
            message: e.to_string(),
        })?;
        if content.is_empty() {
            return Err(PurgeError::ScanFailed {
                root,
                message: "no content files found".to_string(),
            });
        }
        tracing::debug!(root = %root.display(), files = content.len(), "content scanned");

        let request = PurgeRequest {
            project_root: &config.project_root,
            stylesheet: output,
            content: &content,
            keyframes: options.remove_unused_keyframes,
            font_face: options.remove_unused_font_face,
        };
        let purged = self.engine.purge(&request).map_err(PurgeError::EngineFailed)?;

        atomic_write(output, purged.css.as_bytes()).map_err(|source| PurgeError::WriteFailed {
            path: output.clone(),
            source,
        })?;

        let report = PurgeReport {
            output_path: output.clone(),
            rejected: purged.rejected,
            bytes_before,
            bytes_after: purged.css.len() as u64,
        };
        tracing::info!(
            output = %output.display(),
            before = report.bytes_before,
            after = report.bytes_after,
            "purge complete"
        );
        Ok(report)
    }
}

/// `<root>/src` when present, otherwise the project root itself
fn content_root(project_root: &Path) -> PathBuf {
    let src = project_root.join("src");
    if src.is_dir() {
        src
    } else {
        project_root.to_path_buf()
    }
}
