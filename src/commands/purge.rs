use std::path::Path;

use anyhow::Result;
use ngtw::application::PurgeOptions;
use ngtw::config::{ConfigOverrides, Settings};
use ngtw::error::NgtwError;

use super::factory::create_purger;
use crate::ui::context::UiContext;
use crate::ui::views::purge::{render_purge_header, render_purge_report};

pub fn cmd_purge(
    alternate: Option<&Path>,
    keyframes: bool,
    fontface: bool,
    rejected: bool,
    ui: &UiContext,
) -> Result<()> {
    let root = super::project_root()?;
    let config = super::resolve_config(&root, alternate, &ConfigOverrides::new(), ui)?;
    let options = PurgeOptions {
        remove_unused_keyframes: keyframes,
        remove_unused_font_face: fontface,
        print_rejected: rejected,
    };

    if !ui.json {
        print!(
            "{}",
            render_purge_header(&root, &config.output_path, ui.color, ui.unicode)
        );
    }

    let report = create_purger(&root, &Settings::from_env())
        .purge(&config, &options)
        .map_err(NgtwError::from)?;

    if ui.json {
        crate::ui::json::emit_result("purge", "complete", &report)?;
    } else {
        print!(
            "{}",
            render_purge_report(&report, rejected, ui.color, ui.unicode)
        );
    }
    Ok(())
}
