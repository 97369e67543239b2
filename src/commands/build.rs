use std::path::Path;

use anyhow::Result;
use ngtw::config::{ConfigOverrides, Settings};
use ngtw::error::NgtwError;

use super::factory::create_pipeline;
use crate::ui::context::UiContext;
use crate::ui::views::build::{render_build_header, render_build_result};

pub fn cmd_build(purge: bool, alternate: Option<&Path>, ui: &UiContext) -> Result<()> {
    let root = super::project_root()?;
    let overrides = ConfigOverrides::new().with_purge(purge);
    let config = super::resolve_config(&root, alternate, &overrides, ui)?;

    if !ui.json {
        print!("{}", render_build_header(&config, ui.color, ui.unicode));
    }

    let pipeline = create_pipeline(&root, &Settings::from_env());
    let outcome = pipeline.run(&config).map_err(NgtwError::from)?;
    tracing::info!(
        output = %outcome.build.output_path.display(),
        duration_ms = outcome.build.duration_ms,
        purged = outcome.purge.is_some(),
        "build finished"
    );

    if ui.json {
        crate::ui::json::emit_result("build", "complete", &outcome)?;
    } else {
        print!(
            "{}",
            render_build_result(&root, &outcome, ui.color, ui.unicode)
        );
    }
    Ok(())
}
