//! Content hash tracking
//!
//! Editors often touch a file without changing it (save-on-focus, format
//! on save with no diff). Comparing content hashes keeps those events from
//! triggering rebuilds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::infrastructure::fs::hash_file;

#[derive(Debug, Default)]
pub struct ContentHashes {
    hashes: HashMap<PathBuf, String>,
}

impl ContentHashes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the current content of `path`, if readable
    pub fn seed(&mut self, path: &Path) {
        if let Ok(hash) = hash_file(path) {
            self.hashes.insert(path.to_path_buf(), hash);
        }
    }

    /// Whether `path` differs from the last content seen
    ///
    /// Unreadable (usually removed) files count as changed and are
    /// forgotten, so a later re-creation is noticed too.
    pub fn changed(&mut self, path: &Path) -> bool {
        match hash_file(path) {
            Ok(hash) => self.hashes.insert(path.to_path_buf(), hash.clone()) != Some(hash),
            Err(_) => {
                self.hashes.remove(path);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
