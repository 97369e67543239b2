//! Content scan for the purge pass
//!
//! Collects the template and script files whose text decides which
//! selectors are still in use. Honors `.gitignore` (with or without a
//! git repository) and skips hidden entries, so `node_modules` and build
//! output stay out of the scan. Unit specs (`.spec.ts`) and type
//! declarations (`.d.ts`) are left out too.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Extensions of files scanned for selector usage
pub const CONTENT_EXTENSIONS: &[&str] = &["html", "ts", "tsx", "js", "jsx"];

/// Walk `root` and return every content file, sorted
pub fn scan_content(root: &Path) -> Result<Vec<PathBuf>, ignore::Error> {
    let mut files = Vec::new();

    for entry in WalkBuilder::new(root).require_git(false).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let is_content = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext));
        // Specs and type declarations never reference selectors at runtime.
        let is_excluded = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".spec.ts") || n.ends_with(".d.ts"));
        if is_content && !is_excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
