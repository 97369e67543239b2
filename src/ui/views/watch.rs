use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use ngtw::application::WatchEvent;

pub fn render_watch_header(
    source: &str,
    output: &str,
    purge: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "ngtw watch");
    header.add("Source", source);
    header.add("Output", output);
    header.add("Purge", if purge { "on" } else { "off" });
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { watching, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), watching.join(", "))
        }
        WatchEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::BuildStarted { .. } => {
            format!("{} {} Building...\n", prefix, icon(Icon::Progress))
        }
        WatchEvent::BuildComplete {
            output,
            duration_ms,
            purged,
            rejected,
        } => {
            let purge_note = if *purged {
                format!(", purged {} selectors", rejected)
            } else {
                String::new()
            };
            format!(
                "{} {} Built {} in {}ms{}\n",
                prefix,
                icon(Icon::Success),
                output,
                duration_ms,
                purge_note
            )
        }
        WatchEvent::Error { stage, message } => format!(
            "{} {} {} failed: {}\n",
            prefix,
            icon(Icon::Error),
            stage,
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        WatchEvent::Shutdown { discarded } => {
            let note = match discarded {
                0 => String::new(),
                n => format!(" ({} pending change(s) discarded)", n),
            };
            format!("\n{} {} Watch stopped.{}\n", prefix, icon(Icon::Watch), note)
        }
    }
}
