use anyhow::Result;
use ngtw::domain::ports::{ManifestInjector, ScriptChange};
use ngtw::error::NgtwError;
use ngtw::infrastructure::PackageJsonInjector;

use crate::ui::context::UiContext;
use crate::ui::views::scripts::render_scripts_report;

const MANIFEST: &str = "package.json";

pub fn cmd_scripts(ui: &UiContext) -> Result<()> {
    let root = super::project_root()?;
    let report = PackageJsonInjector::new()
        .inject_scripts(&root.join(MANIFEST))
        .map_err(NgtwError::from)?;

    if ui.json {
        let changes: Vec<serde_json::Value> = report.changes.iter().map(change_json).collect();
        let payload = serde_json::json!({
            "modified": report.is_modified(),
            "changes": changes,
        });
        crate::ui::json::emit_result("scripts", "complete", &payload)?;
    } else {
        print!(
            "{}",
            render_scripts_report(&report, ui.color, ui.unicode)
        );
    }
    Ok(())
}

fn change_json(change: &ScriptChange) -> serde_json::Value {
    match change {
        ScriptChange::Added { name, command } => {
            serde_json::json!({ "name": name, "status": "added", "command": command })
        }
        ScriptChange::Updated { name, from, to } => {
            serde_json::json!({ "name": name, "status": "updated", "from": from, "command": to })
        }
        ScriptChange::Unchanged { name } => {
            serde_json::json!({ "name": name, "status": "unchanged" })
        }
    }
}
