use ngtw::domain::ports::{ScriptChange, ScriptsReport};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_scripts_report(
    report: &ScriptsReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for change in &report.changes {
        let line = match change {
            ScriptChange::Added { name, command } => format!(
                "{} {}: {}",
                Icon::Success.colored(supports_color, supports_unicode),
                name,
                command
            ),
            ScriptChange::Updated { name, from, to } => format!(
                "{} {}: {} {} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                name,
                ColoredText::dim(from.as_str()).render(supports_color),
                Icon::Arrow.render(supports_unicode),
                to
            ),
            ScriptChange::Unchanged { name } => format!(
                "{} {}: {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                name,
                ColoredText::dim("already uses ngtw").render(supports_color)
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    if !report.is_modified() {
        out.push_str("package.json already up to date\n");
    }
    out
}
