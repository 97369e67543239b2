use anyhow::Result;
use ngtw::application::ConfigureUseCase;
use ngtw::config::{ConfigOverrides, ConfigStore};
use ngtw::error::NgtwError;

use crate::ui::context::UiContext;
use crate::ui::views::configure::render_configure_result;

pub fn cmd_configure(overrides: &ConfigOverrides, ui: &UiContext) -> Result<()> {
    let root = super::project_root()?;
    let store = ConfigStore::in_project(&root);
    let store_path = store.path().to_path_buf();

    let result = ConfigureUseCase::new(store)
        .execute(&root, overrides)
        .map_err(NgtwError::from)?;
    super::report_warnings(&result.warnings, ui);

    if ui.json {
        let payload = serde_json::json!({
            "path": store_path.display().to_string(),
            "replaced": result.replaced,
            "config": result.config,
        });
        crate::ui::json::emit_result("configure", "complete", &payload)?;
    } else {
        print!(
            "{}",
            render_configure_result(&store_path, &result, ui.color, ui.unicode)
        );
    }
    Ok(())
}
