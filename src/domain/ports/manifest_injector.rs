//! Manifest Injector Port
//!
//! Adds the conventional build/serve/watch entries to the host project's
//! package manifest.

use std::path::Path;

use crate::error::ManifestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptChange {
    Added { name: String, command: String },
    Updated { name: String, from: String, to: String },
    Unchanged { name: String },
}

impl ScriptChange {
    pub fn name(&self) -> &str {
        match self {
            ScriptChange::Added { name, .. }
            | ScriptChange::Updated { name, .. }
            | ScriptChange::Unchanged { name } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptsReport {
    pub changes: Vec<ScriptChange>,
}

impl ScriptsReport {
    /// Whether the manifest was modified
    pub fn is_modified(&self) -> bool {
        self.changes
            .iter()
            .any(|c| !matches!(c, ScriptChange::Unchanged { .. }))
    }
}

pub trait ManifestInjector {
    fn inject_scripts(&self, manifest_path: &Path) -> Result<ScriptsReport, ManifestError>;
}
