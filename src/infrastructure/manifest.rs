//! `package.json` script injection

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::ports::{ManifestInjector, ScriptChange, ScriptsReport};
use crate::error::ManifestError;

use super::fs::atomic_write;

const TOOL: &str = "ngtw";

/// Edits the `scripts` table of a `package.json`, keeping key order
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonInjector;

impl PackageJsonInjector {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestInjector for PackageJsonInjector {
    fn inject_scripts(&self, manifest_path: &Path) -> Result<ScriptsReport, ManifestError> {
        let raw = fs::read_to_string(manifest_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ManifestError::NotFound {
                path: manifest_path.to_path_buf(),
            },
            _ => ManifestError::Invalid {
                path: manifest_path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        let invalid = |message: String| ManifestError::Invalid {
            path: manifest_path.to_path_buf(),
            message,
        };

        let mut manifest: Value = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;
        let root = manifest
            .as_object_mut()
            .ok_or_else(|| invalid("top level is not an object".to_string()))?;
        let scripts = root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| invalid("`scripts` is not an object".to_string()))?;

        let mut report = ScriptsReport::default();
        for (name, compose) in RULES {
            let existing = match scripts.get(*name) {
                None => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(_) => return Err(invalid(format!("`scripts.{name}` is not a string"))),
            };
            let change = plan(name, existing, *compose);
            if let ScriptChange::Added { command, .. } | ScriptChange::Updated { to: command, .. } =
                &change
            {
                scripts.insert(name.to_string(), Value::String(command.clone()));
            }
            report.changes.push(change);
        }

        if report.is_modified() {
            let mut body = serde_json::to_string_pretty(&manifest).map_err(|e| invalid(e.to_string()))?;
            body.push('\n');
            atomic_write(manifest_path, body.as_bytes()).map_err(|source| ManifestError::Write {
                path: manifest_path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %manifest_path.display(), "scripts injected");
        }
        Ok(report)
    }
}

/// Builds the desired command from the current one, if any
type Compose = fn(Option<&str>) -> String;

const RULES: &[(&str, Compose)] = &[("prestart", prestart), ("start", start), ("build", build)];

fn prestart(existing: Option<&str>) -> String {
    match existing {
        Some(cmd) => format!("{TOOL} build && {cmd}"),
        None => format!("{TOOL} build"),
    }
}

fn start(existing: Option<&str>) -> String {
    format!("{} & {TOOL} watch", existing.unwrap_or("ng serve"))
}

fn build(existing: Option<&str>) -> String {
    format!("{TOOL} build && {}", existing.unwrap_or("ng build"))
}

fn plan(name: &str, existing: Option<String>, compose: Compose) -> ScriptChange {
    let name = name.to_string();
    match existing {
        None => ScriptChange::Added {
            command: compose(None),
            name,
        },
        Some(cmd) if invokes_tool(&cmd) => ScriptChange::Unchanged { name },
        Some(cmd) => ScriptChange::Updated {
            to: compose(Some(&cmd)),
            from: cmd,
            name,
        },
    }
}

fn invokes_tool(command: &str) -> bool {
    command
        .split(|c: char| c.is_whitespace() || "&|;()".contains(c))
        .any(|token| token == TOOL)
}
