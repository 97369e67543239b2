use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use ngtw::application::WatchEvent;
use ngtw::config::paths::display_relative;
use ngtw::config::{ConfigOverrides, Settings};
use ngtw::error::NgtwError;

use super::factory::create_watch_use_case;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(alternate: Option<&Path>, ui: &UiContext) -> Result<()> {
    let root = super::project_root()?;
    let config = super::resolve_config(&root, alternate, &ConfigOverrides::new(), ui)?;
    let settings = Settings::from_env();

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &display_relative(&root, &config.source_path),
                &display_relative(&root, &config.output_path),
                config.purge_enabled,
                ui.color,
                ui.unicode
            )
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    let mut use_case = create_watch_use_case(&root, &settings);
    use_case
        .start(&config, running, |event| {
            // fatal, reported by main along with the exit status
            if matches!(&event, WatchEvent::Error { stage, .. } if stage == "watch") {
                return;
            }
            if json {
                println!("{}", event.to_json());
                return;
            }
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let rendered = render_watch_event(&timestamp, &event, color, unicode);
            match event {
                WatchEvent::Error { .. } => eprint!("{rendered}"),
                _ => print!("{rendered}"),
            }
        })
        .map_err(NgtwError::from)?;

    Ok(())
}
